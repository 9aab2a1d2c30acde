//! Policy editor session
//!
//! A UI-agnostic model of the SLA settings screen: section selection, staged
//! edits, save, holiday management and outcome notices.

pub mod draft;
pub mod notice;
pub mod section;
pub mod session;

pub use draft::{HolidayDraft, RuleDraft};
pub use notice::{Notice, NoticeKind};
pub use section::EditorSection;
pub use session::{EditorOverview, PolicyEditor};
