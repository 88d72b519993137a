//! Контракты данных, общие для редакторов документов и хоста приложения.

pub mod documents;
pub mod domain;
