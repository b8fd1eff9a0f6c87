//! Hydration depth rule for nested entity reads.
//!
//! Entities form a chain `User -> Channel -> Video -> Iteration`. Reading any
//! entity hydrates its relationships, but naive hydration in both directions
//! recurses forever (`User -> Channel -> owner User -> Channel -> ...`).
//!
//! The rule threaded through every store read:
//!
//! - An entity requested directly is [`Hydration::Root`]. Its parents are
//!   hydrated as [`Hydration::Ancestor`] and its children as
//!   [`Hydration::Descendant`].
//! - An ancestor keeps walking up but never expands its child lists. The one
//!   exception is a video's own iteration and editor lists, which are leaves
//!   and are loaded as descendants whenever the video itself is hydrated.
//! - A descendant is the bare row. It never re-embeds the parent it was
//!   reached from and never expands further.

/// How far a store read expands an entity's relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Requested directly by the caller.
    Root,
    /// Reached by walking up from a child (e.g. a video's channel).
    Ancestor,
    /// Reached by walking down from a parent (e.g. a channel's videos).
    Descendant,
}

impl Hydration {
    /// Depth at which this entity's parent is hydrated, if at all.
    pub fn parent(self) -> Option<Hydration> {
        match self {
            Hydration::Root | Hydration::Ancestor => Some(Hydration::Ancestor),
            Hydration::Descendant => None,
        }
    }

    /// Depth at which this entity's child list is hydrated, if at all.
    pub fn children(self) -> Option<Hydration> {
        match self {
            Hydration::Root => Some(Hydration::Descendant),
            Hydration::Ancestor | Hydration::Descendant => None,
        }
    }

    /// Depth for a video's iteration and editor lists.
    ///
    /// Loaded whenever the video is hydrated at all, including when it is an
    /// ancestor of the iteration being read.
    pub fn leaf_lists(self) -> Option<Hydration> {
        match self {
            Hydration::Root | Hydration::Ancestor => Some(Hydration::Descendant),
            Hydration::Descendant => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the longest possible path and make sure it terminates.
    ///
    /// Starting from a root iteration: video (ancestor) -> channel (ancestor)
    /// -> owner (ancestor) -> owner's channels (none).
    #[test]
    fn walking_up_stops_at_the_owner() {
        let iteration = Hydration::Root;
        let video = iteration.parent().unwrap();
        let channel = video.parent().unwrap();
        let owner = channel.parent().unwrap();

        assert_eq!(owner, Hydration::Ancestor);
        assert_eq!(owner.children(), None, "owner must not re-expand its channels");
        assert_eq!(channel.children(), None, "ancestor channel must not list videos");
    }

    #[test]
    fn descendants_never_reembed_parents() {
        let channel = Hydration::Root;
        let video = channel.children().unwrap();
        assert_eq!(video, Hydration::Descendant);
        assert_eq!(video.parent(), None);
        assert_eq!(video.children(), None);
        assert_eq!(video.leaf_lists(), None);
    }

    #[test]
    fn video_lists_survive_walking_up() {
        let iteration = Hydration::Root;
        let video = iteration.parent().unwrap();
        assert_eq!(video.leaf_lists(), Some(Hydration::Descendant));
    }

    #[test]
    fn root_user_lists_channels_without_owner() {
        let user = Hydration::Root;
        let channel = user.children().unwrap();
        assert_eq!(channel.parent(), None);
    }
}
