use std::cell::RefCell;
use std::rc::Rc;

use float_cmp::approx_eq;
use game_core::*;
use glam::Vec2;

const FRAME: f64 = 1000.0 / 60.0;

/// Audio backend that records every tone it is asked to play
#[derive(Clone, Default)]
struct RecordingAudio {
    played: Rc<RefCell<Vec<ToneSpec>>>,
    ready: Rc<RefCell<bool>>,
}

impl RecordingAudio {
    fn count(&self, cue: Cue) -> usize {
        let tone = cue.tone();
        self.played.borrow().iter().filter(|t| **t == tone).count()
    }
}

impl AudioBackend for RecordingAudio {
    fn ensure_ready(&mut self) -> bool {
        *self.ready.borrow_mut() = true;
        true
    }

    fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    fn play(&mut self, tone: &ToneSpec) {
        self.played.borrow_mut().push(*tone);
    }
}

fn started_game() -> (Game, RecordingAudio) {
    let audio = RecordingAudio::default();
    let mut game = Game::new(42, Box::new(audio.clone()));
    game.start();
    game.frame(0.0);
    (game, audio)
}

fn place_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
    let mut ball = game.ball_mut().expect("ball");
    ball.pos = pos;
    ball.vel = vel;
}

/// Stage a ball that leaves the table on the next frame and run that frame.
/// Returns the timestamp of the scoring frame.
fn concede(game: &mut Game, side: Side, now_ms: f64) -> f64 {
    match side {
        Side::Left => place_ball(game, Vec2::new(12.0, 60.0), Vec2::new(-4.0, 0.0)),
        Side::Right => {
            let x = game.config.table_width - 12.0;
            place_ball(game, Vec2::new(x, 60.0), Vec2::new(4.0, 0.0));
        }
    }
    let t = now_ms + FRAME;
    assert!(game.frame(t));
    t
}

#[test]
fn test_nominal_tick_moves_ball_exactly() {
    let (mut game, _audio) = started_game();
    let center = game.config.table_center();
    place_ball(&mut game, center, Vec2::new(3.0, 2.0));

    game.frame(FRAME);

    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(center.x + 3.0, center.y + 2.0));
}

#[test]
fn test_ball_leaving_left_scores_for_right() {
    let (mut game, audio) = started_game();

    concede(&mut game, Side::Left, 0.0);

    assert_eq!(game.score(), Score { left: 0, right: 1 });
    assert!(game.events().right_scored);
    assert_eq!(game.particle_count(), 20, "Exactly one burst");
    assert_eq!(audio.count(Cue::Explosion), 1);
    let ball = game.ball().unwrap();
    assert!(!ball.visible && ball.respawning);
    assert_eq!(game.phase(), MatchPhase::Disintegrating);
}

#[test]
fn test_ball_leaving_right_scores_for_left() {
    let (mut game, _audio) = started_game();

    concede(&mut game, Side::Right, 0.0);

    assert_eq!(game.score(), Score { left: 1, right: 0 });
    assert!(game.events().left_scored);
    assert_eq!(game.particle_count(), 20);
}

#[test]
fn test_ball_frozen_until_serve() {
    let (mut game, _audio) = started_game();
    let t = concede(&mut game, Side::Left, 0.0);
    let frozen_at = game.ball().unwrap().pos;

    game.frame(t + FRAME);
    game.frame(t + 2.0 * FRAME);

    assert_eq!(game.ball().unwrap().pos, frozen_at);
    assert_eq!(game.score().right, 1, "No repeat scoring while respawning");
}

#[test]
fn test_respawn_sequence_on_virtual_clock() {
    let (mut game, audio) = started_game();
    let t = concede(&mut game, Side::Left, 0.0);

    game.poll_timers(t + 2_999.0);
    assert_eq!(game.phase(), MatchPhase::Disintegrating);
    assert_eq!(game.countdown(), None);

    game.poll_timers(t + 3_000.0);
    assert_eq!(game.phase(), MatchPhase::CountingDown);
    assert_eq!(game.countdown(), Some(3));
    assert_eq!(audio.count(Cue::Beep), 1, "Beep on the initial 3");

    game.poll_timers(t + 4_000.0);
    assert_eq!(game.countdown(), Some(2));
    game.poll_timers(t + 5_000.0);
    assert_eq!(game.countdown(), Some(1));
    assert_eq!(audio.count(Cue::Beep), 3);
    assert!(!game.ball().unwrap().visible);

    game.poll_timers(t + 6_000.0);
    assert_eq!(game.countdown(), None);
    assert_eq!(game.phase(), MatchPhase::Playing);
    assert_eq!(audio.count(Cue::Beep), 3, "No beep when the ball is served");
    assert!(game.timers.is_empty(), "Countdown timer cancelled after serve");

    let ball = game.ball().unwrap();
    assert!(ball.visible && !ball.respawning);
    assert_eq!(ball.pos, game.config.table_center());
    assert!(ball.vel.x < 0.0, "Serve heads toward the side that conceded");
    assert_eq!(
        game.paddle(Side::Left).unwrap().y,
        game.config.paddle_home_y()
    );
}

#[test]
fn test_late_poll_completes_countdown_once() {
    let (mut game, audio) = started_game();
    let t = concede(&mut game, Side::Right, 0.0);

    game.poll_timers(t + 3_000.0);
    game.poll_timers(t + 60_000.0);

    assert_eq!(game.phase(), MatchPhase::Playing);
    assert_eq!(audio.count(Cue::Beep), 3);
    assert!(game.ball().unwrap().vel.x > 0.0);
    assert!(game.timers.is_empty());
}

#[test]
fn test_single_late_poll_keeps_wall_clock_pacing() {
    let (mut game, audio) = started_game();
    let t = concede(&mut game, Side::Left, 0.0);

    // One poll exactly when the serve is due: delay at +3000, steps at +4000/+5000/+6000
    game.poll_timers(t + 6_000.0);

    assert_eq!(game.phase(), MatchPhase::Playing);
    assert_eq!(game.countdown(), None);
    assert_eq!(audio.count(Cue::Beep), 3);
    assert!(game.ball().unwrap().visible);
    assert!(game.timers.is_empty());
}

#[test]
fn test_countdown_steps_follow_delay_not_poll() {
    let (mut game, _audio) = started_game();
    let t = concede(&mut game, Side::Left, 0.0);

    // Delay observed 900 ms late; the next step is still due at +4000
    game.poll_timers(t + 3_900.0);
    assert_eq!(game.countdown(), Some(3));
    game.poll_timers(t + 4_000.0);
    assert_eq!(game.countdown(), Some(2));
}

#[test]
fn test_match_ends_at_target_score() {
    let (mut game, _audio) = started_game();
    game.score = Score { left: 9, right: 9 };

    let t = concede(&mut game, Side::Right, 0.0);

    assert_eq!(game.score(), Score { left: 10, right: 9 });
    assert_eq!(game.phase(), MatchPhase::MatchOver { winner: Side::Left });
    assert_eq!(game.events().match_over, Some(Side::Left));
    assert!(!game.is_running(), "Simulation stops immediately");
    assert!(game.timers.is_empty(), "No countdown after the final point");
    assert_eq!(game.take_winner(), Some(Side::Left));
    assert_eq!(game.take_winner(), None, "Winner announced once");

    game.poll_timers(t + 10_000.0);
    assert_eq!(game.countdown(), None);
    assert!(!game.frame(t + 10_000.0));
}

#[test]
fn test_finished_match_cannot_resume() {
    let (mut game, _audio) = started_game();
    game.score = Score { left: 0, right: 9 };
    concede(&mut game, Side::Left, 0.0);
    assert_eq!(game.phase(), MatchPhase::MatchOver { winner: Side::Right });

    assert!(!game.toggle_pause());
    assert!(!game.is_running());
}

#[test]
fn test_start_resets_everything() {
    let (mut game, _audio) = started_game();
    let t = concede(&mut game, Side::Left, 0.0);
    game.poll_timers(t + 3_000.0);
    assert_eq!(game.countdown(), Some(3));

    game.start();

    assert_eq!(game.score(), Score::new());
    assert_eq!(game.particle_count(), 0);
    assert!(game.timers.is_empty());
    assert_eq!(game.countdown(), None);
    assert_eq!(game.phase(), MatchPhase::Playing);
    let ball = game.ball().unwrap();
    assert!(ball.visible && !ball.respawning);
    assert_eq!(ball.pos, game.config.table_center());

    // Stale timers from the previous match never fire
    game.poll_timers(t + 60_000.0);
    assert_eq!(game.countdown(), None);
    assert_eq!(game.phase(), MatchPhase::Playing);
}

#[test]
fn test_match_point_recentres_paddles_before_countdown() {
    let (mut game, _audio) = started_game();
    game.score = Score { left: 8, right: 0 };
    game.queue_input(InputEvent::PointerMove { y: 0.0 });
    game.frame(FRAME);
    assert_eq!(game.paddle(Side::Left).unwrap().y, 0.0);

    let t = concede(&mut game, Side::Right, FRAME);
    assert_eq!(game.score().left, 9);
    game.poll_timers(t + 3_000.0);

    assert_eq!(
        game.paddle(Side::Left).unwrap().y,
        game.config.paddle_home_y(),
        "Match point re-centres paddles"
    );
}

#[test]
fn test_no_recentre_before_match_point() {
    let (mut game, _audio) = started_game();
    game.queue_input(InputEvent::PointerMove { y: 0.0 });
    game.frame(FRAME);

    let t = concede(&mut game, Side::Right, FRAME);
    game.poll_timers(t + 3_000.0);

    assert_eq!(game.paddle(Side::Left).unwrap().y, 0.0);
}

#[test]
fn test_timers_run_while_paused() {
    let (mut game, _audio) = started_game();
    let t = concede(&mut game, Side::Left, 0.0);
    assert!(!game.toggle_pause());

    game.poll_timers(t + 3_000.0);
    game.poll_timers(t + 6_000.0);

    assert_eq!(game.phase(), MatchPhase::Playing);
    assert!(game.ball().unwrap().visible);
    assert!(!game.is_running());
}

#[test]
fn test_resume_has_no_time_debt() {
    let (mut game, _audio) = started_game();
    let center = game.config.table_center();
    place_ball(&mut game, center, Vec2::new(3.0, 2.0));
    game.frame(FRAME);
    assert!(!game.toggle_pause());
    assert!(!game.frame(30_000.0), "No ticks while paused");

    assert!(game.toggle_pause());
    game.frame(60_000.0);
    assert_eq!(game.ball().unwrap().pos, center + Vec2::new(3.0, 2.0));

    game.frame(60_000.0 + FRAME);
    let pos = game.ball().unwrap().pos;
    assert!(approx_eq!(f32, pos.x, center.x + 6.0, epsilon = 1e-3));
    assert!(approx_eq!(f32, pos.y, center.y + 4.0, epsilon = 1e-3));
}

#[test]
fn test_input_stays_bounded_while_paused() {
    let (mut game, _audio) = started_game();
    game.frame(FRAME);
    assert!(!game.toggle_pause());

    for i in 0..100_000 {
        game.queue_input(InputEvent::PointerMove { y: (i % 500) as f32 });
    }
    game.queue_input(InputEvent::PointerMove { y: 250.0 });
    game.queue_input(InputEvent::KeyDown(Key::Down));

    assert_eq!(game.input.pointer_y, Some(250.0), "Only the latest position is kept");
    assert_eq!(game.input.steer, Some(Steer::Down));

    assert!(game.toggle_pause());
    game.frame(200_000.0);

    let paddle = game.paddle(Side::Left).unwrap();
    assert_eq!(paddle.center_y(), 250.0);
    assert_eq!(paddle.dy, game.config.player_paddle_speed);
    assert!(game.input.is_empty(), "Intent consumed by the tick");
}

#[test]
fn test_centre_hit_on_player_paddle() {
    let (mut game, _audio) = started_game();
    let paddle = game.paddle(Side::Left).unwrap();
    place_ball(
        &mut game,
        Vec2::new(paddle.x + paddle.width + 13.0, paddle.center_y()),
        Vec2::new(-4.0, 0.0),
    );

    game.frame(FRAME);

    let ball = game.ball().unwrap();
    assert!(game.events().ball_hit_paddle);
    assert!(ball.vel.x > 0.0, "Ball leaves the left paddle heading right");
    assert_eq!(ball.vel.y, 0.0);
    assert!(approx_eq!(f32, ball.vel.x, 4.0 * 1.08 * 1.05, epsilon = 1e-4));
}

#[test]
fn test_missing_audio_is_silent() {
    let mut game = Game::silent(3);
    game.start();
    game.frame(0.0);

    let t = concede(&mut game, Side::Left, 0.0);
    game.poll_timers(t + 6_000.0);

    assert!(!game.audio_ready());
    assert_eq!(game.phase(), MatchPhase::Playing);
}

#[test]
fn test_invariants_over_long_run() {
    let mut game = Game::silent(2024);
    game.start();
    let steps = [8.0, FRAME, 33.0, 7.0, FRAME * 2.0];
    let mut now = 0.0;
    let mut matches_finished = 0;

    for i in 0..30_000usize {
        now += steps[i % steps.len()];
        if i % 90 == 0 {
            let key = if (i / 90) % 2 == 0 { Key::Up } else { Key::Down };
            game.queue_input(InputEvent::KeyDown(key));
        }
        if i % 90 == 45 {
            game.queue_input(InputEvent::KeyUp(Key::Up));
        }

        let particles_before = game.particle_count();
        game.poll_timers(now);
        game.frame(now);

        let max_y = game.config.table_height - game.config.paddle_height;
        for side in [Side::Left, Side::Right] {
            let paddle = game.paddle(side).unwrap();
            assert!(
                (0.0..=max_y).contains(&paddle.y),
                "{side:?} paddle out of bounds at step {i}: {}",
                paddle.y
            );
        }

        let ball = game.ball().unwrap();
        if !ball.respawning {
            assert!(
                ball.speed() <= game.config.max_ball_speed + 1e-4,
                "Ball too fast at step {i}: {}",
                ball.speed()
            );
        }

        let particles_after = game.particle_count();
        if game.events().scored() {
            assert!(particles_after <= particles_before + game.config.particle_burst_count);
        } else {
            assert!(
                particles_after <= particles_before,
                "Particles appeared without a burst at step {i}"
            );
        }

        if game.take_winner().is_some() {
            let score = game.score();
            assert!(score.left == 10 || score.right == 10, "Match ends exactly at 10");
            matches_finished += 1;
            game.start();
        }
    }

    assert!(game.score().left + game.score().right > 0 || matches_finished > 0);
}
