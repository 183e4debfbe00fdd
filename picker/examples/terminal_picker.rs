// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive terminal presenter for the color picker engine.
//!
//! Run with `cargo run --example terminal_picker`, then type one of:
//!
//! - `255 128 0` - set the three channels (free-form, clamped and coerced)
//! - `#ff8800` or `ff8800` - set from hex text
//! - `pick #ff8800` - simulate the native color picker
//! - `random` - randomize
//! - `reset` - back to black
//! - `copy` - copy the displayed `#RRGGBB` (system clipboard, OSC 52 fallback)
//! - `quit` - exit

use std::io::{BufRead as _, Write as _};

use r3bl_color_picker::{ColorSnapshot,
                        ColorState,
                        Osc52Clipboard,
                        Presenter,
                        SystemClipboard,
                        copy_to_clipboard};

/// Renders one line per snapshot: swatch, hex code, channel badges, contrast info,
/// and the invalid-hex indicator.
#[derive(Debug)]
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render(&mut self, snapshot: &ColorSnapshot) {
        let color = snapshot.color;
        let contrast = &snapshot.contrast;

        // SGR 48;2 sets a truecolor background for the swatch.
        print!(
            "\x1b[48;2;{};{};{}m      \x1b[0m {} | R {:>3} G {:>3} B {:>3}",
            color.red,
            color.green,
            color.blue,
            snapshot.hex_with_hash(),
            color.red,
            color.green,
            color.blue,
        );
        print!(
            " | contrast white {:.2}:1, black {:.2}:1, suggested text: {}",
            contrast.contrast_with_white,
            contrast.contrast_with_black,
            contrast.suggested_text,
        );
        if snapshot.hex_field_invalid {
            print!(" | invalid hex!");
        }
        println!();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut state = ColorState::new();
    state.add_presenter(Box::new(TerminalPresenter));

    // Initial paint, same path as the real widget bootstrap.
    let mut snapshot = state.reset();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        _ = std::io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        snapshot = match tokens.as_slice() {
            [] => continue,
            ["quit" | "exit"] => break,
            ["random"] => state.randomize(),
            ["reset"] => state.reset(),
            ["copy"] => {
                let mut primary = SystemClipboard;
                let mut fallback = Osc52Clipboard::new();
                let content = snapshot.hex_with_hash();
                // Identical acknowledgment no matter which strategy landed it.
                _ = copy_to_clipboard(content.as_str(), &mut primary, &mut fallback);
                println!("copied {content}");
                continue;
            }
            ["pick", hex] => state.apply_from_picker(hex),
            [red, green, blue] => state.apply_from_channels(*red, *green, *blue),
            [text] => state.apply_from_hex_text(text),
            _ => {
                println!("unrecognized input, try `255 128 0`, `#ff8800`, `random`, \
                          `reset`, `copy`, `quit`");
                continue;
            }
        };
    }
}
