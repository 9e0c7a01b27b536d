//! FILENAME: src/main.rs
// PURPOSE: Desktop entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    taskdesk_lib::run();
}
