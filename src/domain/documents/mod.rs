pub mod kdoc;
