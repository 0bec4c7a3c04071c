mod picker_dto;

pub use picker_dto::{SelectChangeQuery, SelectionQuery, SelectionViewDto};
