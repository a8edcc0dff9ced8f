use hecs::World;
use log::info;

use crate::audio::{AudioBackend, NullAudio};
use crate::input::InputEvent;
use crate::render::{self, Surface};
use crate::systems::*;
use crate::{
    create_ball, create_paddle, step, Ball, Config, Controller, Events, FrameClock, GameRng,
    InputState, MatchPhase, MatchTimer, Paddle, Score, Side, Time, Timers,
};

/// The whole simulation: entities, resources, clocks and match state.
///
/// All mutation happens through `&mut self`, so a host only has to keep the
/// game on one thread and forward events and timestamps into it.
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    pub rng: GameRng,
    pub clock: FrameClock,
    pub timers: Timers<MatchTimer>,
    pub phase: MatchPhase,
    pub countdown: Option<u8>,
    pub(crate) audio: Box<dyn AudioBackend>,
    pub(crate) pending_winner: Option<Side>,
}

impl Game {
    pub fn new(seed: u64, audio: Box<dyn AudioBackend>) -> Self {
        Self::with_config(Config::new(), seed, audio)
    }

    /// Headless game with no audio device
    pub fn silent(seed: u64) -> Self {
        Self::new(seed, Box::new(NullAudio))
    }

    pub fn with_config(config: Config, seed: u64, audio: Box<dyn AudioBackend>) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Left, Controller::Player, &config);
        create_paddle(&mut world, Side::Right, Controller::Ai, &config);
        create_ball(
            &mut world,
            config.table_center(),
            glam::Vec2::ZERO,
            config.ball_size,
        );
        reset_ball(&mut world, 1.0, &config, &mut rng);

        Self {
            world,
            time: Time::default(),
            clock: FrameClock::new(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            rng,
            timers: Timers::new(),
            phase: MatchPhase::Playing,
            countdown: None,
            audio,
            pending_winner: None,
        }
    }

    /// Start button: full reset, then run.
    pub fn start(&mut self) {
        self.user_gesture();
        self.reset();
        self.clock.start();
        info!("Match started");
    }

    /// New match state without touching the running flag
    pub fn reset(&mut self) {
        self.clear_countdown_timers();
        self.score.reset();
        reset_ball(&mut self.world, 1.0, &self.config, &mut self.rng);
        reset_paddles(&mut self.world, &self.config);
        clear_particles(&mut self.world);
        self.input.clear();
        self.phase = MatchPhase::Playing;
        self.pending_winner = None;
    }

    /// Pause/Resume button. Returns whether the game is now running.
    ///
    /// A finished match stays stopped; only [`Game::start`] begins a new one.
    pub fn toggle_pause(&mut self) -> bool {
        self.user_gesture();
        if self.clock.is_running() {
            self.clock.stop();
            info!("Paused");
        } else if matches!(self.phase, MatchPhase::MatchOver { .. }) {
            info!("Match is over; press start for a new one");
        } else {
            self.clock.start();
            info!("Resumed");
        }
        self.clock.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// A click, key press or pointer move: the moment audio may be opened.
    pub fn user_gesture(&mut self) {
        self.audio.ensure_ready();
    }

    pub fn queue_input(&mut self, event: InputEvent) {
        if !matches!(event, InputEvent::KeyUp(_)) {
            self.user_gesture();
        }
        self.input.record(event);
    }

    /// Display-refresh callback. Runs one tick and returns true, or returns
    /// false without touching state while stopped.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let Some(delta) = self.clock.advance(now_ms) else {
            return false;
        };
        self.time = Time::new(delta, now_ms);
        self.tick();
        true
    }

    fn tick(&mut self) {
        self.events.clear();

        let scorer = step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.events,
            &mut self.input,
        );
        if let Some(side) = scorer {
            self.point_scored(side);
        }

        integrate_particles(&mut self.world, &self.time, &self.config);
    }

    /// Fire every match timer due at `now_ms`. Independent of the frame
    /// clock: timers keep running while paused.
    pub fn poll_timers(&mut self, now_ms: f64) {
        while let Some(fired) = self.timers.pop_due(now_ms) {
            self.handle_timer(fired.id, fired.event, fired.at_ms);
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        render::draw(surface, &self.world, &self.config, self.countdown);
    }

    /// Winner of a match that just ended, reported once
    pub fn take_winner(&mut self) -> Option<Side> {
        self.pending_winner.take()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn countdown(&self) -> Option<u8> {
        self.countdown
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn audio_ready(&self) -> bool {
        self.audio.is_ready()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn particle_count(&self) -> usize {
        particle_count(&self.world)
    }

    /// Direct access to the ball for hosts and tests that stage positions
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        let entity = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(entity, _)| entity)?;
        self.world.get::<&mut Ball>(entity).ok()
    }
}
