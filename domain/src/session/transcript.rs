//! Append-only conversation transcript

use super::entities::{Turn, TurnMetadata};
use crate::core::error::DomainError;
use serde::Serialize;

/// Ordered log of one session's turns (Entity)
///
/// Turns are kept in insertion order and never edited, removed or
/// reordered. `metadata[i]` always belongs to the i-th assistant turn.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionTranscript {
    turns: Vec<Turn>,
    metadata: Vec<TurnMetadata>,
}

impl SessionTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end of the transcript
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Append metadata for the oldest assistant turn that has none yet.
    ///
    /// Fails when every assistant turn already has metadata, which would
    /// break index alignment.
    pub fn append_metadata(&mut self, meta: TurnMetadata) -> Result<(), DomainError> {
        if self.metadata.len() >= self.assistant_turn_count() {
            return Err(DomainError::UnalignedMetadata);
        }
        self.metadata.push(meta);
        Ok(())
    }

    /// Append an assistant turn together with its metadata
    pub fn append_reply(&mut self, reply: impl Into<String>, meta: TurnMetadata) {
        self.turns.push(Turn::assistant(reply));
        self.metadata.push(meta);
    }

    /// All turns in chronological order
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// Metadata of the i-th assistant turn
    pub fn metadata_at(&self, i: usize) -> Option<&TurnMetadata> {
        self.metadata.get(i)
    }

    pub fn metadata(&self) -> &[TurnMetadata] {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn assistant_turn_count(&self) -> usize {
        self.turns.iter().filter(|t| t.is_assistant()).count()
    }

    /// Turns paired with their metadata, for redisplay.
    ///
    /// User turns yield `None`; assistant turns yield their aligned entry.
    pub fn entries(&self) -> impl Iterator<Item = (&Turn, Option<&TurnMetadata>)> + '_ {
        let mut assistant_index = 0;
        self.turns.iter().map(move |turn| {
            if turn.is_assistant() {
                let meta = self.metadata.get(assistant_index);
                assistant_index += 1;
                (turn, meta)
            } else {
                (turn, None)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;
    use crate::session::usage::InputTokens;

    fn meta(secs: f64, tokens: u64) -> TurnMetadata {
        TurnMetadata::new(secs, InputTokens::Counted(tokens))
    }

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = SessionTranscript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.metadata_at(0).is_none());
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut transcript = SessionTranscript::new();
        transcript.append(Turn::user("q1"));
        transcript.append_reply("a1", meta(0.5, 10));
        transcript.append(Turn::user("q2"));
        transcript.append(Turn::user("q3"));
        transcript.append_reply("a3", meta(0.7, 30));

        let contents: Vec<_> = transcript.all().iter().map(|t| t.content()).collect();
        assert_eq!(contents, ["q1", "a1", "q2", "q3", "a3"]);

        let roles: Vec<_> = transcript.all().iter().map(|t| t.role()).collect();
        assert_eq!(
            roles,
            [Role::User, Role::Assistant, Role::User, Role::User, Role::Assistant]
        );
    }

    #[test]
    fn test_metadata_aligned_with_assistant_turns() {
        let mut transcript = SessionTranscript::new();
        transcript.append(Turn::user("q1"));
        transcript.append_reply("a1", meta(0.5, 10));
        transcript.append(Turn::user("q2"));
        transcript.append(Turn::user("q3"));
        transcript.append_reply("a3", meta(0.7, 30));

        assert_eq!(transcript.metadata().len(), transcript.assistant_turn_count());
        assert_eq!(transcript.metadata_at(1), Some(&meta(0.7, 30)));

        let paired: Vec<_> = transcript
            .entries()
            .filter_map(|(turn, m)| m.map(|m| (turn.content(), m.input_tokens)))
            .collect();
        assert_eq!(
            paired,
            [("a1", InputTokens::Counted(10)), ("a3", InputTokens::Counted(30))]
        );
    }

    #[test]
    fn test_append_metadata_requires_pending_assistant_turn() {
        let mut transcript = SessionTranscript::new();
        transcript.append(Turn::user("q1"));
        assert_eq!(
            transcript.append_metadata(meta(0.1, 1)),
            Err(DomainError::UnalignedMetadata)
        );

        transcript.append(Turn::assistant("a1"));
        assert!(transcript.append_metadata(meta(0.1, 1)).is_ok());
        assert_eq!(
            transcript.append_metadata(meta(0.2, 2)),
            Err(DomainError::UnalignedMetadata)
        );
        assert_eq!(transcript.metadata().len(), 1);
    }

    #[test]
    fn test_earlier_turns_unchanged_after_appends() {
        let mut transcript = SessionTranscript::new();
        transcript.append(Turn::user("first"));
        let snapshot = transcript.all().to_vec();

        transcript.append_reply("reply", meta(1.0, 5));
        transcript.append(Turn::user("second"));

        assert_eq!(&transcript.all()[..1], snapshot.as_slice());
    }
}
