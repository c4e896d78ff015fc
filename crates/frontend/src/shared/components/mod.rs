pub mod card_animated;
pub mod card_title;
pub mod charts;
pub mod indicator_set;
pub mod page_header;
pub mod stat_card;
pub mod ui;
