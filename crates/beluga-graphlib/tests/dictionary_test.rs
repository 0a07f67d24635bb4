use beluga_graphlib::Dictionary;

#[test]
fn indices_are_dense_in_first_seen_order() {
    let mut dict = Dictionary::new();
    assert_eq!(dict.index_of("alpha".to_string()), 0);
    assert_eq!(dict.index_of("beta".to_string()), 1);
    assert_eq!(dict.index_of("gamma".to_string()), 2);
    assert_eq!(dict.len(), 3);
}

#[test]
fn repeated_keys_keep_their_first_index() {
    let mut dict = Dictionary::new();
    dict.index_of("alpha".to_string());
    dict.index_of("beta".to_string());
    assert_eq!(dict.index_of("alpha".to_string()), 0);
    assert_eq!(dict.len(), 2);
}

#[test]
fn get_answers_without_assigning() {
    let mut dict = Dictionary::new();
    dict.index_of("alpha".to_string());

    assert_eq!(dict.get("alpha"), Some(0));
    assert_eq!(dict.get("beta"), None);
    assert_eq!(dict.len(), 1);
}

#[test]
fn a_fresh_dictionary_is_empty() {
    let dict: Dictionary<String> = Dictionary::new();
    assert!(dict.is_empty());
    assert_eq!(dict.get("anything"), None);
}

#[test]
fn integer_keys_work_as_well_as_strings() {
    let mut dict = Dictionary::new();
    assert_eq!(dict.index_of(42_u64), 0);
    assert_eq!(dict.index_of(7), 1);
    assert_eq!(dict.index_of(42), 0);
}
