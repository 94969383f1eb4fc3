pub mod city;
pub mod grid;
pub mod interaction;
pub mod ui;
