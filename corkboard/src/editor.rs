//! CardEditor - staged edit session for one card
//!
//! Opening the editor snapshots the card's editable fields into local
//! buffers. Every edit mutates the buffers only; the store is touched at
//! most once per session, by the single `ReplaceCard` issued on commit.
//! Cancel discards the buffers and releases any URLs staged in-session.

use std::collections::BTreeSet;

use tracing::debug;

use crate::card::ReplaceCard;
use crate::context::BoardContext;
use crate::error::Result;
use crate::object_url::ObjectUrl;
use crate::types::{Attachment, AttachmentId, Card, CardId, Label, UserId};
use corkboard_operations::Execute;

/// A file coming out of the platform picker: declared name and MIME type.
/// The picker itself is an external collaborator; the engine only sees
/// these descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub mime_type: String,
}

impl StagedFile {
    /// Describe a picked file
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// An open edit session on one card.
///
/// State machine: Closed -> Open(snapshot) -> {edits}* -> Commit | Cancel
/// -> Closed. Commit and cancel consume the session.
#[derive(Debug)]
pub struct CardEditor {
    card: CardId,
    title: String,
    description: String,
    labels: BTreeSet<Label>,
    assignees: Vec<UserId>,
    attachments: Vec<Attachment>,
    /// URLs acquired by this session that the store does not own yet
    staged_urls: Vec<ObjectUrl>,
}

impl CardEditor {
    /// Open an edit session, snapshotting the card's current field values.
    /// Returns `None` when the id references no card.
    pub fn open(ctx: &BoardContext, card: &CardId) -> Option<Self> {
        let snapshot: &Card = ctx.find_card(card)?;
        Some(Self {
            card: snapshot.id.clone(),
            title: snapshot.title.clone(),
            description: snapshot.description.clone(),
            labels: snapshot.labels.clone(),
            assignees: snapshot.assignees.clone(),
            attachments: snapshot.attachments.clone(),
            staged_urls: Vec::new(),
        })
    }

    /// The card this session edits
    pub fn card_id(&self) -> &CardId {
        &self.card
    }

    /// The staged title buffer
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The staged description buffer
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The staged label set
    pub fn labels(&self) -> &BTreeSet<Label> {
        &self.labels
    }

    /// The staged assignee list
    pub fn assignees(&self) -> &[UserId] {
        &self.assignees
    }

    /// The staged attachment list
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Replace the title buffer
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the description buffer
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Toggle a label: added if absent, removed if present
    pub fn toggle_label(&mut self, label: Label) {
        if !self.labels.remove(&label) {
            self.labels.insert(label);
        }
    }

    /// Toggle an assignee, compared by id
    pub fn toggle_assignee(&mut self, user: &UserId) {
        if let Some(index) = self.assignees.iter().position(|u| u == user) {
            self.assignees.remove(index);
        } else {
            self.assignees.push(user.clone());
        }
    }

    /// Stage every file of a picker selection as a new attachment.
    /// Each gets a fresh id and an acquired session URL. An empty
    /// selection is a no-op.
    pub fn add_attachments(&mut self, ctx: &mut BoardContext, files: &[StagedFile]) {
        for file in files {
            let url = ctx.urls_mut().acquire();
            self.staged_urls.push(url.clone());
            self.attachments
                .push(Attachment::new(&file.name, url, &file.mime_type));
        }
    }

    /// Remove an attachment from the buffer. URLs staged by this session
    /// are released immediately; previously committed ones stay live until
    /// commit replaces the store's list. Returns whether anything was
    /// removed.
    pub fn remove_attachment(&mut self, ctx: &mut BoardContext, id: &AttachmentId) -> bool {
        let Some(index) = self.attachments.iter().position(|a| &a.id == id) else {
            return false;
        };
        let removed = self.attachments.remove(index);
        if let Some(staged) = self.staged_urls.iter().position(|u| *u == removed.url) {
            let url = self.staged_urls.remove(staged);
            ctx.urls_mut().release(&url);
        }
        true
    }

    /// Create a user in the shared roster and assign them to this card's
    /// buffer. Returns the new user's id, or `None` when the name is empty
    /// after trimming.
    pub fn create_and_assign(
        &mut self,
        ctx: &mut BoardContext,
        name: &str,
        avatar: &str,
    ) -> Option<UserId> {
        let avatar = if avatar.trim().is_empty() {
            crate::defaults::AVATARS[0]
        } else {
            avatar
        };
        let id = ctx.roster_mut().add(name, avatar)?.id.clone();
        ctx.mark_changed();
        self.assignees.push(id.clone());
        Some(id)
    }

    /// Commit the session: one `ReplaceCard` carrying every buffer, then
    /// Closed. Returns whether the store changed. If the card vanished
    /// mid-session the staged URLs are released and nothing is touched.
    pub fn commit(self, ctx: &mut BoardContext) -> Result<bool> {
        if ctx.find_card(&self.card).is_none() {
            for url in &self.staged_urls {
                ctx.urls_mut().release(url);
            }
            return Ok(false);
        }

        debug!(card = %self.card, "committing edit session");
        let result = ReplaceCard::new(self.card)
            .with_title(self.title)
            .with_description(self.description)
            .with_labels(self.labels)
            .with_assignees(self.assignees)
            .with_attachments(self.attachments)
            .execute(ctx)?;
        Ok(result["changed"].as_bool().unwrap_or(false))
    }

    /// Cancel the session: release in-session URLs, touch nothing else
    pub fn cancel(self, ctx: &mut BoardContext) {
        for url in &self.staged_urls {
            ctx.urls_mut().release(url);
        }
    }
}
