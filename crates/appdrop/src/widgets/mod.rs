pub mod helpers;
pub mod release_list;
