//! Integration tests for the card detail editor and resource lifecycle

use corkboard::{
    card::DeleteCard, column::DeleteColumn, BoardContext, CardEditor, CardId, Execute, Label,
    StagedFile, UserId,
};

#[test]
fn test_commit_applies_exactly_the_staged_buffers() {
    let mut ctx = BoardContext::seeded();
    let mut editor = CardEditor::open(&ctx, &CardId::from("1")).unwrap();

    editor.set_description("Grocery run");
    editor.toggle_label(Label::Feature);
    editor.toggle_label(Label::Bug);
    editor.toggle_label(Label::Feature); // toggled back off
    editor.toggle_assignee(&UserId::from("2"));
    editor.add_attachments(&mut ctx, &[StagedFile::new("list.txt", "text/plain")]);

    assert!(editor.commit(&mut ctx).unwrap());

    let card = ctx.find_card(&CardId::from("1")).unwrap();
    assert_eq!(card.description, "Grocery run");
    assert_eq!(card.labels.iter().copied().collect::<Vec<_>>(), [Label::Bug]);
    assert_eq!(card.assignees, [UserId::from("2")]);
    assert_eq!(card.attachments.len(), 1);
    assert_eq!(card.attachments[0].name, "list.txt");
}

#[test]
fn test_cancel_after_edits_leaves_store_identical() {
    let mut ctx = BoardContext::seeded();
    let before: Vec<_> = ctx.cards().to_vec();

    let mut editor = CardEditor::open(&ctx, &CardId::from("3")).unwrap();
    editor.set_title("Renamed");
    editor.set_description("Scrapped");
    editor.toggle_label(Label::Review);
    editor.add_attachments(&mut ctx, &[StagedFile::new("draft.md", "text/markdown")]);
    editor.cancel(&mut ctx);

    assert_eq!(ctx.cards(), before.as_slice());
    assert_eq!(ctx.urls().live_count(), 0);
}

#[test]
fn test_session_urls_follow_ownership() {
    let mut ctx = BoardContext::seeded();

    // Commit transfers staged URLs to the store
    let mut editor = CardEditor::open(&ctx, &CardId::from("1")).unwrap();
    editor.add_attachments(&mut ctx, &[StagedFile::new("a.png", "image/png")]);
    editor.commit(&mut ctx).unwrap();
    assert_eq!(ctx.urls().live_count(), 1);

    // A later session that drops the attachment releases it on commit
    let mut editor = CardEditor::open(&ctx, &CardId::from("1")).unwrap();
    let id = editor.attachments()[0].id.clone();
    editor.remove_attachment(&mut ctx, &id);
    assert_eq!(ctx.urls().live_count(), 1); // still owned by the store
    editor.commit(&mut ctx).unwrap();
    assert_eq!(ctx.urls().live_count(), 0);
}

#[test]
fn test_cascades_release_attachment_urls() {
    let mut ctx = BoardContext::seeded();
    let mut editor = CardEditor::open(&ctx, &CardId::from("2")).unwrap();
    editor.add_attachments(
        &mut ctx,
        &[
            StagedFile::new("a.txt", "text/plain"),
            StagedFile::new("b.txt", "text/plain"),
        ],
    );
    editor.commit(&mut ctx).unwrap();
    assert_eq!(ctx.urls().live_count(), 2);

    // Deleting the card's column cascades and releases both
    DeleteColumn::new("inProgress").execute(&mut ctx).unwrap();
    assert_eq!(ctx.urls().live_count(), 0);
}

#[test]
fn test_delete_card_releases_urls() {
    let mut ctx = BoardContext::seeded();
    let mut editor = CardEditor::open(&ctx, &CardId::from("4")).unwrap();
    editor.add_attachments(&mut ctx, &[StagedFile::new("spec.pdf", "application/pdf")]);
    editor.commit(&mut ctx).unwrap();
    assert_eq!(ctx.urls().live_count(), 1);

    DeleteCard::new("4").execute(&mut ctx).unwrap();
    assert_eq!(ctx.urls().live_count(), 0);
}

#[test]
fn test_create_user_and_assign_scenario() {
    let mut ctx = BoardContext::seeded();
    let mut editor = CardEditor::open(&ctx, &CardId::from("2")).unwrap();

    let zoe = editor.create_and_assign(&mut ctx, "Zoé", "🧑‍💻").unwrap();

    // The roster gained Zoé immediately, visible to every card
    assert!(ctx.roster().users().iter().any(|u| u.name == "Zoé"));

    editor.commit(&mut ctx).unwrap();
    let card = ctx.find_card(&CardId::from("2")).unwrap();
    assert!(card.is_assigned(&zoe));
    assert_eq!(ctx.roster().find(&zoe).unwrap().avatar, "🧑‍💻");
}

#[test]
fn test_store_untouched_between_open_and_commit() {
    let mut ctx = BoardContext::seeded();
    let before = ctx.find_card(&CardId::from("1")).unwrap().clone();

    let mut editor = CardEditor::open(&ctx, &CardId::from("1")).unwrap();
    for label in Label::ALL {
        editor.toggle_label(label);
        assert_eq!(ctx.find_card(&CardId::from("1")).unwrap(), &before);
    }
    editor.set_description("still local");
    assert_eq!(ctx.find_card(&CardId::from("1")).unwrap(), &before);

    assert!(editor.commit(&mut ctx).unwrap());
    let after = ctx.find_card(&CardId::from("1")).unwrap();
    assert_eq!(after.labels.len(), Label::ALL.len());
    assert_eq!(after.description, "still local");
}
