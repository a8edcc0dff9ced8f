//! Browser client for Pong
//!
//! Canvas 2D rendering and Web Audio around the `game_core` simulation. The
//! page owns the animation loop and forwards timestamps and input here.

#![cfg(target_arch = "wasm32")]

mod audio;
mod canvas;
mod error;
mod input;
mod logger;

use std::cell::RefCell;

use audio::WebAudio;
use canvas::CanvasSurface;
use error::ClientError;
use game_core::{Game, InputEvent, Score, Side};
use log::{info, LevelFilter};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, Window};

const PLAYER_SCORE_ID: &str = "player-score";
const COMPUTER_SCORE_ID: &str = "computer-score";
const PAUSE_BUTTON_ID: &str = "pause-btn";

/// Main client state
pub struct Client {
    game: Game,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    window: Window,
    document: Document,
    shown_score: Option<Score>,
}

impl Client {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window.document().ok_or(ClientError::NoWindow)?;
        let surface = CanvasSurface::new(&canvas)?;
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, Box::new(WebAudio::new()));

        info!(
            "Client ready: {}x{} table, seed {seed}",
            game.config.table_width, game.config.table_height
        );

        let mut client = Self {
            game,
            canvas,
            surface,
            window,
            document,
            shown_score: None,
        };
        client.game.render(&mut client.surface);
        client.update_labels();
        Ok(client)
    }

    /// One animation frame: fire due timers, tick, draw, refresh the page.
    pub fn frame(&mut self, now_ms: f64) {
        self.game.poll_timers(now_ms);
        if self.game.frame(now_ms) {
            self.game.render(&mut self.surface);
        }
        self.update_labels();

        if let Some(winner) = self.game.take_winner() {
            self.announce_winner(winner);
        }
    }

    pub fn start(&mut self) {
        self.game.start();
        self.update_labels();
        self.set_text(PAUSE_BUTTON_ID, "Pause");
    }

    pub fn toggle_pause(&mut self) -> bool {
        let running = self.game.toggle_pause();
        self.set_text(PAUSE_BUTTON_ID, if running { "Pause" } else { "Resume" });
        running
    }

    pub fn queue(&mut self, event: InputEvent) {
        self.game.queue_input(event);
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn update_labels(&mut self) {
        let score = self.game.score();
        if self.shown_score != Some(score) {
            self.set_text(PLAYER_SCORE_ID, &score.get(Side::Left).to_string());
            self.set_text(COMPUTER_SCORE_ID, &score.get(Side::Right).to_string());
            self.shown_score = Some(score);
        }
    }

    fn announce_winner(&self, winner: Side) {
        let message = format!("{} wins!", winner.label());
        info!("{message}");
        let _ = self.window.alert_with_message(&message);
    }
}

// Global client storage for WASM bindings
thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(ClientError::NotInitialized.into()),
    })
}

#[wasm_bindgen]
pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    logger::init(LevelFilter::Info);
    let client = Client::new(canvas)?;
    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    Ok(())
}

#[wasm_bindgen]
pub fn frame(now_ms: f64) -> Result<(), JsValue> {
    with_client(|client| client.frame(now_ms))
}

#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    with_client(Client::start)
}

/// Returns whether the game is running afterwards
#[wasm_bindgen]
pub fn toggle_pause() -> Result<bool, JsValue> {
    with_client(Client::toggle_pause)
}

#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<(), JsValue> {
    with_client(|client| {
        if let Some(event) = input::handle_key_down(key) {
            client.queue(event);
        }
    })
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<(), JsValue> {
    with_client(|client| {
        if let Some(event) = input::handle_key_up(key) {
            client.queue(event);
        }
    })
}

#[wasm_bindgen]
pub fn pointer_move(client_y: f64) -> Result<(), JsValue> {
    with_client(|client| {
        let event = input::handle_pointer_move(&client.canvas, client_y);
        client.queue(event);
    })
}
