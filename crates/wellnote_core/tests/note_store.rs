use wellnote_core::{
    MemoryPreferences, NoteStore, NoteStoreError, PreferencesStore, NOTES_KEY, NO_PROMPT_SENTINEL,
};

#[test]
fn load_all_returns_empty_list_when_key_absent() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);

    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn append_then_load_round_trips_at_head() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);
    store.load_all().unwrap();

    store.append("older entry", Some("Breathe"), None).unwrap();
    let newer = store
        .append("Feeling okay today", Some("Breathe"), None)
        .unwrap()
        .expect("non-empty text should append");

    let mut reloaded = NoteStore::new(&prefs);
    let notes = reloaded.load_all().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, newer.id);
    assert_eq!(notes[0].text, "Feeling okay today");
    assert_eq!(notes[0].prompt, "Breathe");
    assert_eq!(notes[0].author, None);
    assert_eq!(notes[1].text, "older entry");
}

#[test]
fn whitespace_only_text_is_a_no_op() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);
    store.load_all().unwrap();
    store.append("kept", Some("Breathe"), None).unwrap();
    let persisted_before = prefs.get(NOTES_KEY).unwrap();

    let appended = store.append("   \t\n", Some("Breathe"), None).unwrap();

    assert!(appended.is_none());
    assert_eq!(store.notes().len(), 1);
    assert_eq!(prefs.get(NOTES_KEY).unwrap(), persisted_before);
}

#[test]
fn append_trims_text_and_applies_prompt_sentinel() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);
    store.load_all().unwrap();

    let note = store
        .append("  padded body  ", None, None)
        .unwrap()
        .expect("non-empty after trim");

    assert_eq!(note.text, "padded body");
    assert_eq!(note.prompt, NO_PROMPT_SENTINEL);
}

#[test]
fn ids_stay_unique_for_rapid_appends() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);
    store.load_all().unwrap();

    for i in 0..20 {
        store.append(&format!("note {i}"), None, None).unwrap();
    }

    let mut ids: Vec<i64> = store.notes().iter().map(|note| note.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    // Newest-first means ids descend from the head.
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn remove_drops_matching_id_and_persists() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);
    store.load_all().unwrap();
    let first = store.append("first", None, None).unwrap().unwrap();
    let second = store.append("second", None, None).unwrap().unwrap();

    store.remove(first.id).unwrap();

    let mut reloaded = NoteStore::new(&prefs);
    let notes = reloaded.load_all().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, second.id);
    assert!(notes.iter().all(|note| note.id != first.id));
}

#[test]
fn remove_of_unknown_id_leaves_persisted_value_identical() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);
    store.load_all().unwrap();
    store.append("kept", None, None).unwrap();
    let persisted_before = prefs.get(NOTES_KEY).unwrap();

    store.remove(424242).unwrap();

    assert_eq!(prefs.get(NOTES_KEY).unwrap(), persisted_before);
}

#[test]
fn malformed_persisted_json_fails_the_load() {
    let prefs = MemoryPreferences::new();
    prefs.set(NOTES_KEY, "{not a list").unwrap();
    let mut store = NoteStore::new(&prefs);

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, NoteStoreError::Malformed(_)));
}

#[test]
fn persisted_note_without_author_round_trips() {
    let prefs = MemoryPreferences::new();
    let mut store = NoteStore::new(&prefs);
    store.load_all().unwrap();
    store
        .append("Feeling okay today", Some("Breathe"), None)
        .unwrap();

    let raw = prefs.get(NOTES_KEY).unwrap().unwrap();
    assert!(!raw.contains("author"));

    let mut reloaded = NoteStore::new(&prefs);
    let notes = reloaded.load_all().unwrap();
    assert_eq!(notes[0].author, None);
}
