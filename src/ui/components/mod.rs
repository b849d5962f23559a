pub mod conjugation_card;
pub mod describe_panel;
pub mod stats_sidebar;
pub mod typing_area;
pub mod verb_menu;
