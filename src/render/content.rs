//! Fixed prose of the Deletion Queue help panel.
//!
//! These literals are user-facing copy and must be reproduced exactly.

/// A run of paragraph text, optionally emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
}

pub const HEADING: &str = "Deletion Queue";

pub const LEARN_MORE: &str = "Learn more ";

/// Introductory paragraph, shown with a leading-edge separator.
pub const OVERVIEW: &[Inline] = &[
    Inline::Text("You can view the current "),
    Inline::Strong("matches"),
    Inline::Text(
        " in the deletion queue. A match is a value you wish to search for which \
         identifies rows in your S3 data lake to be deleted. For example, a match \
         could be the ID of a specific customer.",
    ),
];

/// Instructional paragraph, shown with a trailing-edge separator.
///
/// The last sentence describes a rule of the deletion job processor. It is
/// displayed here, not enforced.
pub const INSTRUCTIONS: &[Inline] = &[
    Inline::Text("To add a new match to the deletion queue, choose "),
    Inline::Strong("Add Match to the Deletion Queue"),
    Inline::Text(
        ". To remove a Match from the Deletion Queue, choose the match from the \
         list and then choose ",
    ),
    Inline::Strong("Remove"),
    Inline::Text(
        ". Once you have started a Deletion Job, you should not remove any items \
         from the Deletion Queue which were present when you started the job.",
    ),
];

pub const SEPARATOR_TOP_CLASS: &str = "separator-top";
pub const SEPARATOR_BOTTOM_CLASS: &str = "separator-bottom";
pub const LINK_CLASS: &str = "learnMoreLink";

/// Opens links in a new browsing context.
pub const LINK_TARGET: &str = "_blank";

/// Denies the opened page a handle on the opener and strips the referrer.
pub const LINK_REL: &str = "noopener noreferrer";
