pub mod art_panel;
pub mod channel_panel;
pub mod info_panel;
pub mod mixtape_panel;
pub mod mixtape_table;
pub mod now_view;
pub mod schedule_table;
