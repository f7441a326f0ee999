//! Answer micro-grammars
//!
//! One sub-parser per question type. Each takes the trimmed payload (the text between
//! the outer braces) and never fails: lines or tokens that do not fit the grammar are
//! dropped, so a malformed payload degrades into a shorter answer list.
//!
//! [`feedback`] is shared by the multichoice forms and decodes the `#percentage%#feedback`
//! suffix attached to a single choice.

pub mod feedback;
pub mod matching;
pub mod multichoice;
pub mod numerical;
pub mod shortanswer;

pub use feedback::parse_choice;
pub use matching::parse_matching;
pub use multichoice::parse_multichoice;
pub use numerical::parse_numerical;
pub use shortanswer::parse_shortanswer;
