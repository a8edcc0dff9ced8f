//! Point → disintegration → delay → countdown → serve
//!
//! Scores, the countdown and both wall-clock timers are owned here. Every
//! timer is cancelled together on reset and at match end, so nothing fires
//! into a fresh game.

use log::{debug, info};

use crate::audio::{play_cue, Cue};
use crate::systems::*;
use crate::{Game, Side, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    /// Ball burst into particles; waiting out the respawn delay
    Disintegrating,
    /// Delay elapsed; paddles are being prepared for the countdown
    AwaitingRespawn,
    CountingDown,
    MatchOver { winner: Side },
}

/// Scheduled match events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchTimer {
    /// Serve direction is +1 (right) or -1 (left)
    RespawnDelay { direction: f32 },
    CountdownStep { direction: f32 },
}

impl Game {
    /// Credit `scorer`, burst the ball and either end the match or schedule
    /// the respawn sequence.
    pub(crate) fn point_scored(&mut self, scorer: Side) {
        self.score.increment(scorer);
        info!(
            "{} scores ({} - {})",
            scorer.label(),
            self.score.left,
            self.score.right
        );

        self.audio.ensure_ready();
        if let Some(origin) = retire_ball(&mut self.world) {
            spawn_burst(&mut self.world, origin, &self.config, &mut self.rng);
        }
        play_cue(self.audio.as_mut(), Cue::Explosion);
        self.clear_countdown_timers();
        self.phase = MatchPhase::Disintegrating;

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.clock.stop();
            self.phase = MatchPhase::MatchOver { winner };
            self.events.match_over = Some(winner);
            self.pending_winner = Some(winner);
            info!(
                "Match over: {} wins {} - {}",
                winner.label(),
                self.score.left,
                self.score.right
            );
            return;
        }

        // Serve toward the side that conceded
        let direction = scorer.outward();
        self.timers.schedule_once(
            self.time.now_ms,
            self.config.respawn_delay_ms,
            MatchTimer::RespawnDelay { direction },
        );
    }

    /// `fired_at_ms` is the timer's scheduled time; the countdown is paced from
    /// it so a late poll catches up instead of shifting every step.
    pub(crate) fn handle_timer(&mut self, id: TimerId, timer: MatchTimer, fired_at_ms: f64) {
        match timer {
            MatchTimer::RespawnDelay { direction } => {
                if self.phase != MatchPhase::Disintegrating {
                    return;
                }
                self.phase = MatchPhase::AwaitingRespawn;
                if self.score.is_match_point(self.config.win_score) {
                    debug!("Match point, re-centring paddles");
                    reset_paddles(&mut self.world, &self.config);
                }
                self.start_countdown(direction, fired_at_ms);
            }
            MatchTimer::CountdownStep { direction } => self.countdown_step(id, direction),
        }
    }

    fn start_countdown(&mut self, direction: f32, now_ms: f64) {
        self.countdown = Some(self.config.countdown_start);
        self.phase = MatchPhase::CountingDown;
        debug!("Countdown {}", self.config.countdown_start);
        play_cue(self.audio.as_mut(), Cue::Beep);
        self.timers.schedule_every(
            now_ms,
            self.config.countdown_step_ms,
            MatchTimer::CountdownStep { direction },
        );
    }

    fn countdown_step(&mut self, id: TimerId, direction: f32) {
        let Some(current) = self.countdown else {
            self.timers.cancel(id);
            return;
        };

        let next = current.saturating_sub(1);
        if next > 0 {
            self.countdown = Some(next);
            debug!("Countdown {next}");
            play_cue(self.audio.as_mut(), Cue::Beep);
            return;
        }

        self.timers.cancel(id);
        self.countdown = None;
        reset_paddles(&mut self.world, &self.config);
        reset_ball(&mut self.world, direction, &self.config, &mut self.rng);
        self.phase = MatchPhase::Playing;
        debug!("Ball served, direction {direction}");
    }

    pub(crate) fn clear_countdown_timers(&mut self) {
        self.timers.cancel_all();
        self.countdown = None;
    }
}
