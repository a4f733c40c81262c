mod tables;

pub use self::tables::board as print_board;
