// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod animation;
mod app;
mod config;
mod connection;
mod debug;
mod preview;

use app::OnboardingApp;
use config::{
    parse_launch_mode, LaunchMode, PREVIEW_WINDOW_SIZE, PREVIEW_WINDOW_TITLE, USAGE,
    WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE,
};
use eframe::egui;
use preview::BackgroundPreviewApp;

fn main() -> eframe::Result<()> {
    let mode = match parse_launch_mode(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    match mode {
        LaunchMode::Help => {
            println!("{}", USAGE);
            match debug::get_log_path() {
                Some(path) => println!("Session log: {}", path.display()),
                None => println!("Session log: unavailable (temp dir not writable)"),
            }
            Ok(())
        }
        LaunchMode::Onboarding => run_onboarding(),
        LaunchMode::BackgroundPreview => run_background_preview(),
    }
}

fn run_onboarding() -> eframe::Result<()> {
    debug::log_section("Launching onboarding");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_SIZE.0, WINDOW_SIZE.1])
        .with_min_inner_size([WINDOW_MIN_SIZE.0, WINDOW_MIN_SIZE.1])
        .with_resizable(true);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(OnboardingApp::new(cc)))),
    )
}

fn run_background_preview() -> eframe::Result<()> {
    debug::log_section("Launching background preview");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([PREVIEW_WINDOW_SIZE.0, PREVIEW_WINDOW_SIZE.1])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        PREVIEW_WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(BackgroundPreviewApp::new(cc)))),
    )
}
