// src/gui/components/mod.rs
pub mod button_bar;
pub mod cards;
pub mod feed_report;
pub mod glossary;
pub mod main_panel;
pub mod rich;
pub mod sidebar;
pub mod toolbar;
