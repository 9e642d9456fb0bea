use vcf_core::{
    category_counts, category_diff, delete_contacts, get_contacts, parse, Contact, ContactQuery,
    Projection,
};

/// Helper: build one block.
fn block(body: &[&str]) -> String {
    let mut text = String::from("BEGIN:VCARD\n");
    for line in body {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("END:VCARD\n");
    text
}

/// Helper: parse a list of blocks into contacts.
fn contacts(blocks: &[&[&str]]) -> Vec<Contact> {
    let text: String = blocks.iter().map(|b| block(b)).collect();
    let outcome = parse(&text);
    assert!(outcome.errors.is_empty(), "fixtures must parse cleanly");
    outcome.contacts
}

// ============================================================================
// Category diff
// ============================================================================

#[test]
fn diff_returns_a_not_b() {
    // Friends-not-Work keeps only the pure Friends contact.
    let all = contacts(&[
        &["FN:Alice", "CATEGORIES:Friends"],
        &["FN:Bob", "CATEGORIES:Work,Friends"],
    ]);
    let diff = category_diff(&all, "Friends", "Work");
    assert_eq!(diff.len(), 1);
    assert_eq!(diff[0].name(), "Alice");
}

#[test]
fn diff_is_asymmetric() {
    let all = contacts(&[
        &["FN:Alice", "CATEGORIES:Friends"],
        &["FN:Bob", "CATEGORIES:Work"],
        &["FN:Carol", "CATEGORIES:Work,Friends"],
    ]);
    let friends_only: Vec<String> = category_diff(&all, "Friends", "Work")
        .iter()
        .map(|c| c.name())
        .collect();
    let work_only: Vec<String> = category_diff(&all, "Work", "Friends")
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(friends_only, ["Alice"]);
    assert_eq!(work_only, ["Bob"]);
    // Carol is in both categories and appears in neither direction.
}

#[test]
fn diff_matches_case_insensitively_and_preserves_order() {
    let all = contacts(&[
        &["FN:Bob", "CATEGORIES:friends"],
        &["FN:Alice", "CATEGORIES:FRIENDS"],
    ]);
    let names: Vec<String> = category_diff(&all, "Friends", "Work")
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(names, ["Bob", "Alice"]);
}

#[test]
fn diff_on_empty_input_is_empty() {
    assert!(category_diff(&[], "A", "B").is_empty());
}

// ============================================================================
// Get contacts
// ============================================================================

#[test]
fn unfiltered_query_returns_everything_with_total() {
    let all = contacts(&[&["FN:Alice"], &["FN:Bob"]]);
    let lines = get_contacts(&all, &ContactQuery::default(), Projection::default());
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("BEGIN:VCARD"));
    assert_eq!(lines[2], "Total contacts: 2");
}

#[test]
fn empty_result_still_reports_total_zero() {
    let all = contacts(&[&["FN:Alice", "CATEGORIES:Work"]]);
    let query = ContactQuery {
        has: vec![vec!["Family".to_string()]],
        ..ContactQuery::default()
    };
    let lines = get_contacts(&all, &query, Projection::default());
    assert_eq!(lines, ["Total contacts: 0"]);
}

#[test]
fn has_groups_are_anded_with_or_within_a_group() {
    let all = contacts(&[
        &["FN:Alice", "CATEGORIES:Work,Friends"],
        &["FN:Bob", "CATEGORIES:Work"],
        &["FN:Carol", "CATEGORIES:Friends,Family"],
    ]);
    // Group 1: Work OR Family; group 2: Friends. Both must hold.
    let query = ContactQuery {
        has: vec![
            vec!["Work".to_string(), "Family".to_string()],
            vec!["Friends".to_string()],
        ],
        ..ContactQuery::default()
    };
    let projection = Projection {
        name: true,
        ..Projection::default()
    };
    let lines = get_contacts(&all, &query, projection);
    assert_eq!(lines, ["Alice", "Carol", "Total contacts: 2"]);
}

#[test]
fn not_excludes_any_listed_category() {
    let all = contacts(&[
        &["FN:Alice", "CATEGORIES:Friends"],
        &["FN:Bob", "CATEGORIES:Friends,Spam"],
    ]);
    let query = ContactQuery {
        not: vec![vec!["Spam".to_string()]],
        ..ContactQuery::default()
    };
    let projection = Projection {
        name: true,
        ..Projection::default()
    };
    let lines = get_contacts(&all, &query, projection);
    assert_eq!(lines, ["Alice", "Total contacts: 1"]);
}

#[test]
fn searchname_fragments_are_ored() {
    let all = contacts(&[&["FN:Jane Doe"], &["FN:John Smith"], &["FN:Ada"]]);
    let query = ContactQuery {
        searchname: vec!["doe".to_string(), "smith".to_string()],
        ..ContactQuery::default()
    };
    let projection = Projection {
        name: true,
        ..Projection::default()
    };
    let lines = get_contacts(&all, &query, projection);
    assert_eq!(lines, ["Jane Doe", "John Smith", "Total contacts: 2"]);
}

#[test]
fn projection_joins_columns_with_tabs() {
    let all = contacts(&[&[
        "FN:Alice",
        "TEL:111",
        "TEL:222",
        "CATEGORIES:Work,Friends",
    ]]);
    let projection = Projection {
        name: true,
        number: true,
        category: true,
    };
    let lines = get_contacts(&all, &ContactQuery::default(), projection);
    assert_eq!(lines, ["Alice\t111;222\tWork,Friends", "Total contacts: 1"]);
}

#[test]
fn number_projection_with_no_tel_is_an_empty_column() {
    let all = contacts(&[&["FN:Alice"]]);
    let projection = Projection {
        name: true,
        number: true,
        ..Projection::default()
    };
    let lines = get_contacts(&all, &ContactQuery::default(), projection);
    assert_eq!(lines, ["Alice\t", "Total contacts: 1"]);
}

// ============================================================================
// Category counts
// ============================================================================

#[test]
fn counts_once_per_contact_per_distinct_category() {
    // CATEGORIES:Work;Work contributes 1 to Work, not 2.
    let all = contacts(&[
        &["FN:Alice", "CATEGORIES:Work;Work"],
        &["FN:Bob", "CATEGORIES:Work,Friends"],
    ]);
    let counts = category_counts(&all);
    assert_eq!(counts, [("Work".to_string(), 2), ("Friends".to_string(), 1)]);
}

#[test]
fn counts_merge_case_variants_under_first_seen_spelling() {
    let all = contacts(&[
        &["FN:Alice", "CATEGORIES:work"],
        &["FN:Bob", "CATEGORIES:Work"],
    ]);
    let counts = category_counts(&all);
    assert_eq!(counts, [("work".to_string(), 2)]);
}

#[test]
fn counts_order_descending_with_first_seen_tie_break() {
    let all = contacts(&[
        &["FN:A", "CATEGORIES:Rare,Common"],
        &["FN:B", "CATEGORIES:Common,Also"],
        &["FN:C", "CATEGORIES:Common"],
    ]);
    let counts = category_counts(&all);
    assert_eq!(
        counts,
        [
            ("Common".to_string(), 3),
            ("Rare".to_string(), 1),
            ("Also".to_string(), 1),
        ]
    );
}

#[test]
fn counts_on_empty_input_are_empty() {
    assert!(category_counts(&[]).is_empty());
}

// ============================================================================
// Delete contacts
// ============================================================================

#[test]
fn delete_removes_exact_name_matches() {
    let all = contacts(&[&["FN:Alice"], &["FN:Bob"]]);
    let out = delete_contacts(&all, &["alice".to_string()], &[]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name(), "Bob");
}

#[test]
fn delete_of_absent_name_is_identity() {
    let all = contacts(&[&["FN:Alice"], &["FN:Bob"]]);
    let out = delete_contacts(&all, &["Nobody".to_string()], &[]);
    assert_eq!(out, all);
}

#[test]
fn delete_does_not_match_substrings() {
    let all = contacts(&[&["FN:Jane Doe"]]);
    let out = delete_contacts(&all, &["Jane".to_string()], &[]);
    assert_eq!(out.len(), 1);
}

#[test]
fn delete_with_keep_truncates_instead_of_removing() {
    // --keep number retains only FN and TEL; everything else goes.
    let all = contacts(&[&[
        "FN:Jane Doe",
        "TEL:111",
        "EMAIL:jane@example.com",
        "PHOTO:data",
    ]]);
    let out = delete_contacts(&all, &["Jane Doe".to_string()], &["TEL".to_string()]);
    assert_eq!(out.len(), 1);
    assert_eq!(
        out[0].raw_text,
        "BEGIN:VCARD\nFN:Jane Doe\nTEL:111\nEND:VCARD"
    );
}

#[test]
fn keep_uses_n_when_fn_is_missing() {
    let all = contacts(&[&["N:Doe;Jane", "TEL:111", "EMAIL:jane@example.com"]]);
    let out = delete_contacts(&all, &["Jane Doe".to_string()], &["TEL".to_string()]);
    assert_eq!(out[0].raw_text, "BEGIN:VCARD\nN:Doe;Jane\nTEL:111\nEND:VCARD");
}

#[test]
fn unmatched_contacts_keep_their_raw_text() {
    let folded = "BEGIN:VCARD\nFN:Alice\nNOTE:fold\n ed\nEND:VCARD\n";
    let outcome = parse(folded);
    let out = delete_contacts(&outcome.contacts, &["Bob".to_string()], &[]);
    assert_eq!(out[0].raw_text, folded.trim_end());
}

#[test]
fn delete_output_is_a_new_sequence() {
    let all = contacts(&[&["FN:Alice", "TEL:111", "EMAIL:a@b.c"]]);
    let _ = delete_contacts(&all, &["Alice".to_string()], &["TEL".to_string()]);
    // The input sequence is untouched.
    assert_eq!(all[0].properties.len(), 3);
}
