use assert_matches::assert_matches;

use museu_core::admin::{AdminMode, Draft};
use museu_core::error::CoreError;
use museu_core::exhibition::Category;
use museu_core::view::for_category;
use museu_db::{ExhibitionStore, FileStorage, MemoryStorage};
use museu_site::{AdminController, SiteError, Submitted};

fn add(admin: &mut AdminController<MemoryStorage>, title: &str, category: Category) {
    admin.set_title(title);
    admin.set_description(format!("<p>{title}</p>"));
    admin.set_category(category);
    admin.submit().unwrap();
}

fn admin_with(titles: &[&str]) -> AdminController<MemoryStorage> {
    let mut admin = AdminController::open(MemoryStorage::new());
    for title in titles {
        add(&mut admin, title, Category::Permanent);
    }
    admin
}

fn titles<S: museu_db::KeyValueStorage>(admin: &AdminController<S>) -> Vec<String> {
    admin.records().iter().map(|r| r.title.clone()).collect()
}

// ---------------------------------------------------------------------------
// Edit / delete interplay
// ---------------------------------------------------------------------------

#[test]
fn deleting_the_record_being_edited_resets_the_form() {
    let mut admin = admin_with(&["A", "B", "C", "D", "E"]);
    admin.begin_edit(2).unwrap();
    assert_eq!(admin.draft().title, "C");

    admin.delete(2).unwrap();

    assert_eq!(admin.mode(), AdminMode::Create);
    assert_eq!(admin.draft(), &Draft::blank());
    assert_eq!(titles(&admin), vec!["A", "B", "D", "E"]);
}

#[test]
fn deleting_an_earlier_record_keeps_editing_the_same_one() {
    let mut admin = admin_with(&["A", "B", "C"]);
    admin.begin_edit(2).unwrap();
    admin.set_title("C2");

    admin.delete(0).unwrap();

    assert_eq!(admin.mode(), AdminMode::Edit { index: 1 });
    assert_eq!(admin.draft().title, "C2");
    assert_eq!(admin.submit().unwrap(), Submitted::Updated { index: 1 });
    assert_eq!(titles(&admin), vec!["B", "C2"]);
}

#[test]
fn deleting_a_later_record_keeps_the_edit_index() {
    let mut admin = admin_with(&["A", "B", "C"]);
    admin.begin_edit(0).unwrap();
    admin.delete(2).unwrap();
    assert_eq!(admin.mode(), AdminMode::Edit { index: 0 });
    assert_eq!(admin.draft().title, "A");
}

#[test]
fn delete_in_create_mode_keeps_the_draft() {
    let mut admin = admin_with(&["A", "B"]);
    admin.set_title("work in progress");
    admin.delete(0).unwrap();
    assert_eq!(admin.mode(), AdminMode::Create);
    assert_eq!(admin.draft().title, "work in progress");
}

#[test]
fn delete_out_of_range_changes_nothing() {
    let mut admin = admin_with(&["A"]);
    admin.begin_edit(0).unwrap();
    assert_matches!(admin.delete(3), Err(SiteError::Store(_)));
    assert_eq!(admin.mode(), AdminMode::Edit { index: 0 });
    assert_eq!(titles(&admin), vec!["A"]);
}

#[test]
fn edit_submit_updates_in_place_and_returns_to_create() {
    let mut admin = admin_with(&["A", "B", "C"]);
    admin.begin_edit(1).unwrap();
    admin.set_title("B2");
    admin.set_category(Category::Archive);

    assert_eq!(admin.submit().unwrap(), Submitted::Updated { index: 1 });
    assert_eq!(titles(&admin), vec!["A", "B2", "C"]);
    assert_eq!(admin.records()[1].category, Category::Archive);
    assert_eq!(admin.mode(), AdminMode::Create);
    assert_eq!(admin.draft(), &Draft::blank());
}

// ---------------------------------------------------------------------------
// Image slots
// ---------------------------------------------------------------------------

#[test]
fn image_slots_never_drop_below_one() {
    let mut admin = admin_with(&[]);
    assert!(!admin.remove_image_slot(0).unwrap());
    assert_eq!(admin.draft().images.len(), 1);

    admin.append_image_slot();
    admin.append_image_slot();
    assert!(admin.remove_image_slot(1).unwrap());
    assert!(admin.remove_image_slot(0).unwrap());
    assert!(!admin.remove_image_slot(0).unwrap());
    assert_eq!(admin.draft().images.len(), 1);
}

#[test]
fn set_image_slot_out_of_range_is_refused() {
    let mut admin = admin_with(&[]);
    assert_matches!(
        admin.set_image_slot(1, "https://img.example/x.jpg"),
        Err(SiteError::Core(CoreError::OutOfRange { index: 1, len: 1 }))
    );
}

#[test]
fn blank_image_slots_are_stored_but_not_listed() {
    let mut admin = admin_with(&[]);
    admin.set_title("A");
    admin.set_description("<p>A</p>");
    admin.append_image_slot();
    admin.set_image_slot(0, "https://img.example/a.jpg").unwrap();
    admin.submit().unwrap();

    assert_eq!(
        admin.records()[0].images,
        vec!["https://img.example/a.jpg".to_string(), String::new()]
    );
    assert_eq!(admin.listing()[0].images, vec!["https://img.example/a.jpg"]);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn whitespace_only_fields_fail_validation() {
    let mut admin = admin_with(&[]);
    admin.set_title("   ");
    admin.set_description("  ");

    let err = admin.submit().unwrap_err();
    assert_matches!(
        &err,
        SiteError::Core(CoreError::Validation(fields))
            if fields.contains("title") && fields.contains("description")
    );
    assert!(admin.records().is_empty());
    assert_eq!(admin.draft().title, "   ");
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn concrete_scenario_through_the_admin_page() {
    let storage = MemoryStorage::new();
    let mut admin = AdminController::open(storage.clone());
    add(&mut admin, "A", Category::Permanent);
    add(&mut admin, "B", Category::Temporary);
    add(&mut admin, "C", Category::Permanent);

    admin.delete(0).unwrap();

    let fresh = ExhibitionStore::open(storage);
    let permanent: Vec<(usize, String)> = for_category(fresh.list(), Category::Permanent)
        .into_iter()
        .map(|e| (e.index, e.record.title))
        .collect();
    assert_eq!(permanent, vec![(1, "C".to_string())]);
}

#[test]
fn changes_survive_reopening_the_data_directory() {
    let dir = tempfile::tempdir().unwrap();

    let mut admin = AdminController::open(FileStorage::new(dir.path()));
    admin.set_title("Azulejos");
    admin.set_description("<p>Tiles</p>");
    admin.set_category(Category::Temporary);
    admin.submit().unwrap();
    drop(admin);

    let reopened = AdminController::open(FileStorage::new(dir.path()));
    assert_eq!(titles(&reopened), vec!["Azulejos"]);
    assert_eq!(reopened.records()[0].category, Category::Temporary);
}
