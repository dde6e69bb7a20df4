pub mod alert;
pub mod comments_dialog;
pub mod event_card;
pub mod event_form;
pub mod event_list;
pub mod event_map;
pub mod filter_panel;
pub mod friends_panel;
pub mod guard;
pub mod invite_dialog;
pub mod navbar;
pub mod page;

pub use alert::{ErrorAlert, SuccessAlert};
pub use comments_dialog::CommentsDialog;
pub use event_card::EventCard;
pub use event_form::EventFormDialog;
pub use event_list::EventList;
pub use event_map::EventMap;
pub use filter_panel::{tag_key, FilterPanel, TagBadge, TagChip};
pub use friends_panel::FriendsPanel;
pub use guard::RequireRole;
pub use invite_dialog::InviteDialog;
pub use navbar::Navbar;
pub use page::Page;
