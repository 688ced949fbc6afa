// ABOUTME: UI components for the TUI interface including card list, study pane, add form and help

pub mod add_card_form;
pub mod card_list;
pub mod flashcard;
pub mod help;
pub mod hit_map;
pub mod layout;

pub use add_card_form::AddCardFormComponent;
pub use card_list::CardListComponent;
pub use flashcard::FlashcardComponent;
pub use help::HelpComponent;
pub use hit_map::HitMap;
pub use layout::LayoutComponent;
