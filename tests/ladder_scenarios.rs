use std::io::Write;
use word_ladder::core::LadderConfig;
use word_ladder::dictionary::{CandidateSet, DictionaryError, DictionarySource, load_words};
use word_ladder::graph::{Graph, GraphBuilder, build, neighbors};
use word_ladder::search::{Endpoint, Ladder, PathResult, SearchError, find_path};

fn graph_of(length: usize, words: &[&str]) -> Graph {
    build(&CandidateSet::from_words(
        LadderConfig::new(length).unwrap(),
        words,
    ))
}

fn assert_valid_ladder(graph: &Graph, ladder: &Ladder) {
    for pair in ladder.words().windows(2) {
        assert_eq!(
            pair[0].distance(pair[1].text()),
            Some(1),
            "{} -> {} is not a single substitution",
            pair[0],
            pair[1]
        );
    }
    for word in ladder.words() {
        assert!(graph.contains(word.text()), "{word} is not in the graph");
    }
}

#[test]
fn test_cat_to_dog() {
    let graph = graph_of(3, &["cat", "cot", "cog", "dog", "dot"]);
    let result = find_path(&graph, "cat", "dog").unwrap();

    let ladder = result.ladder().expect("cat and dog are connected");
    assert_eq!(ladder.len(), 4);
    assert_eq!(ladder.source().unwrap().text(), "cat");
    assert_eq!(ladder.target().unwrap().text(), "dog");
    assert_valid_ladder(&graph, ladder);
}

#[test]
fn test_target_missing_from_dictionary() {
    let graph = graph_of(3, &["cat", "car", "can"]);
    let err = find_path(&graph, "cat", "dog").unwrap_err();

    assert!(matches!(
        err,
        SearchError::UnknownWord {
            endpoint: Endpoint::Target,
            ..
        }
    ));
}

#[test]
fn test_source_equals_target() {
    let graph = graph_of(3, &["cat", "car", "can"]);
    let result = find_path(&graph, "cat", "cat").unwrap();

    let ladder = result.into_ladder().unwrap();
    let words: Vec<&str> = ladder.words().iter().map(|w| w.text()).collect();
    assert_eq!(words, vec!["cat"]);
    assert_eq!(ladder.len(), 1);
    assert_eq!(ladder.transformations(), 0);
}

#[test]
fn test_no_path_is_not_an_error() {
    let graph = graph_of(3, &["cat", "cot", "dog", "dig"]);
    let result = find_path(&graph, "cat", "dig").unwrap();
    assert!(matches!(result, PathResult::NoPath { .. }));
}

#[test]
fn test_graph_symmetry_on_built_in_corpus() {
    for length in 3..=5 {
        let config = LadderConfig::new(length).unwrap();
        let words = load_words(&config, &DictionarySource::BuiltIn).unwrap();
        let graph = GraphBuilder::new().build(&words);

        for (id, vertex) in graph.iter() {
            for &neighbor in vertex.neighbors() {
                assert!(graph.vertex(neighbor).neighbors().contains(&id));
            }
        }
    }
}

#[test]
fn test_neighbors_agree_with_graph() {
    let config = LadderConfig::new(4).unwrap();
    let words = load_words(&config, &DictionarySource::BuiltIn).unwrap();
    let graph = build(&words);

    for word in ["cold", "warm", "word"] {
        let id = graph.id_of(word).unwrap();
        let from_graph: Vec<&str> = graph.neighbors(id).map(|n| graph.word(n).text()).collect();
        let direct: Vec<&str> = neighbors(word, &words).into_iter().map(|w| w.text()).collect();
        assert_eq!(from_graph, direct);
        assert!(!direct.contains(&word));
    }
}

#[test]
fn test_cold_to_warm_on_built_in_corpus() {
    let config = LadderConfig::new(4).unwrap();
    let words = load_words(&config, &DictionarySource::BuiltIn).unwrap();
    let graph = build(&words);

    let ladder = find_path(&graph, "cold", "warm")
        .unwrap()
        .into_ladder()
        .unwrap();
    assert_eq!(ladder.len(), 5);
    assert_valid_ladder(&graph, &ladder);
}

#[test]
fn test_dictionary_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Cat\nCOT\ncog\ndog\ndot\ncattle\nd-g").unwrap();

    let config = LadderConfig::new(3).unwrap();
    let source = DictionarySource::File(file.path().to_path_buf());
    let words = load_words(&config, &source).unwrap();
    assert_eq!(words.len(), 5);

    let graph = build(&words);
    let ladder = find_path(&graph, "cat", "dog")
        .unwrap()
        .into_ladder()
        .unwrap();
    assert_eq!(ladder.len(), 4);
}

#[test]
fn test_missing_dictionary_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = DictionarySource::File(dir.path().join("nope.txt"));

    let err = load_words(&LadderConfig::new(4).unwrap(), &source).unwrap_err();
    assert!(matches!(err, DictionaryError::Read { .. }));
}

#[test]
fn test_path_length_grows_with_distance() {
    // A chain: aaa - baa - bba - bbb, so distance from aaa grows along it
    let graph = graph_of(3, &["aaa", "baa", "bba", "bbb"]);
    let lengths: Vec<usize> = ["aaa", "baa", "bba", "bbb"]
        .iter()
        .map(|target| {
            find_path(&graph, "aaa", target)
                .unwrap()
                .ladder()
                .map(Ladder::len)
                .unwrap()
        })
        .collect();
    assert_eq!(lengths, vec![1, 2, 3, 4]);
}
