pub mod nav;
pub mod player;
pub mod spinner;
pub mod track_list;
