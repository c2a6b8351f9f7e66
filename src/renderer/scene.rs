//! Draws a `GameWorld` onto a `Display`

use glam::IVec2;

use super::display::{ACTOR_SPRITE, Display};
use crate::Error;
use crate::settings::Settings;
use crate::sim::{GameState, GameWorld};

/// Vertical pitch of highscore rows
const ROW_HEIGHT: i32 = 10;

/// Redraw the whole frame for the current state and present it
pub fn draw_world<R, D: Display>(
    world: &GameWorld<R>,
    settings: &Settings,
    display: &mut D,
) -> Result<(), Error> {
    display.clear();
    match world.state {
        GameState::StartScreen => draw_start(world, settings, display),
        GameState::Playing => draw_play(world, settings, display),
        GameState::Highscore => draw_highscores(world, settings, display),
    }
    display.present()
}

fn centered_text<D: Display>(display: &mut D, y: i32, text: &str) {
    let width = display.text_size(text).x;
    let x = (display.size().x - width) / 2;
    display.draw_text(IVec2::new(x, y), text);
}

fn draw_actor<R, D: Display>(world: &GameWorld<R>, display: &mut D) {
    let origin = IVec2::new(
        world.tuning.actor_x.to_pixels(),
        world.actor.y.to_pixels(),
    );
    display.blit(origin, &ACTOR_SPRITE);
}

fn draw_start<R, D: Display>(world: &GameWorld<R>, settings: &Settings, display: &mut D) {
    let strings = settings.strings();
    let height = display.size().y;
    centered_text(display, 4, strings.title);
    draw_actor(world, display);
    let prompt_y = height - display.text_size(strings.press_to_start).y - 2;
    centered_text(display, prompt_y, strings.press_to_start);
}

fn draw_play<R, D: Display>(world: &GameWorld<R>, settings: &Settings, display: &mut D) {
    let tuning = &world.tuning;
    let size = display.size();
    let width = tuning.obstacle_width.to_pixels();

    for obstacle in world.field.obstacles() {
        let x = obstacle.x.to_pixels();
        if x >= size.x || x + width <= 0 {
            continue;
        }
        let gap_top = obstacle.gap_start.to_pixels();
        let gap_bottom = obstacle.gap_end(tuning).to_pixels();
        display.fill_rect(IVec2::new(x, 0), IVec2::new(width, gap_top));
        display.fill_rect(
            IVec2::new(x, gap_bottom),
            IVec2::new(width, size.y - gap_bottom),
        );
    }

    draw_actor(world, display);

    if settings.show_score {
        let score = world.run.score.to_string();
        let bounds = display.text_size(&score);
        display.draw_text(IVec2::new(size.x - bounds.x - 1, 1), &score);
    }

    if world.run.is_over() {
        let strings = settings.strings();
        let line_height = display.text_size(strings.game_over).y;
        let y = (size.y - line_height) / 2;
        centered_text(display, y, strings.game_over);
        let result = format!("{}: {}", strings.score, world.run.score);
        centered_text(display, y + line_height + 2, &result);
    }
}

fn draw_highscores<R, D: Display>(world: &GameWorld<R>, settings: &Settings, display: &mut D) {
    centered_text(display, 1, settings.strings().highscores);

    let hidden = if settings.blink_new_highscore && !world.blink_visible {
        world.highscores.latest()
    } else {
        None
    };

    for (i, score) in world.highscores.entries().iter().enumerate() {
        if hidden == Some(i) {
            continue;
        }
        let line = format!("{}. {}", i + 1, score);
        centered_text(display, 12 + i as i32 * ROW_HEIGHT, &line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::platform::seeded_rng;
    use crate::renderer::FrameBuffer;
    use crate::settings::Language;
    use crate::sim::{Fixed, Obstacle, ObstacleField};
    use crate::tuning::Tuning;
    use rand_pcg::Pcg32;

    fn setup() -> (GameWorld<Pcg32>, FrameBuffer) {
        let world = GameWorld::new(Tuning::default(), seeded_rng(5)).unwrap();
        let fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT).unwrap();
        (world, fb)
    }

    #[test]
    fn test_start_screen() {
        let (world, mut fb) = setup();
        draw_world(&world, &Settings::default(), &mut fb).unwrap();
        assert!(fb.has_label("FLAPPY BIRD"));
        assert!(fb.has_label("Press button"));
        // Sprite pixel (2, 0) sits at actor_x + 2, spawn_y
        let y = world.tuning.actor_spawn_y().to_pixels();
        assert!(fb.pixel(world.tuning.actor_x.to_pixels() + 2, y));
    }

    #[test]
    fn test_start_screen_german() {
        let (world, mut fb) = setup();
        draw_world(&world, &Settings::from_language(Language::German), &mut fb).unwrap();
        assert!(fb.has_label("Taste druecken"));
    }

    #[test]
    fn test_pipes_converted_to_pixels() {
        let (mut world, mut fb) = setup();
        world.start_run(0);
        // 40.7px truncates to 40px, gap 15.3px to 15px
        world.field = ObstacleField::from_slots([Obstacle {
            x: Fixed::from_raw(407),
            gap_start: Fixed::from_raw(153),
        }; 3]);
        draw_world(&world, &Settings::default(), &mut fb).unwrap();

        let gap_bottom = 15 + 24;
        assert!(fb.pixel(40, 0));
        assert!(fb.pixel(49, 14));
        assert!(!fb.pixel(39, 0));
        assert!(!fb.pixel(50, 0));
        assert!(!fb.pixel(45, 15));
        assert!(!fb.pixel(45, gap_bottom - 1));
        assert!(fb.pixel(45, gap_bottom));
        assert!(fb.pixel(45, SCREEN_HEIGHT - 1));
        assert!(fb.has_label("0"));
        assert!(!fb.has_label("GAME OVER"));
    }

    #[test]
    fn test_score_right_aligned_and_banner() {
        let (mut world, mut fb) = setup();
        world.start_run(0);
        world.run.score = 12;
        world.end_run(10);
        draw_world(&world, &Settings::default(), &mut fb).unwrap();

        let score = fb.labels().iter().find(|l| l.text == "12").unwrap();
        assert_eq!(score.origin.x + fb.text_size("12").x, SCREEN_WIDTH - 1);
        assert!(fb.has_label("GAME OVER"));
        assert!(fb.has_label("Score: 12"));
    }

    #[test]
    fn test_highscore_blink_hides_latest() {
        let (mut world, mut fb) = setup();
        world.start_run(0);
        world.run.score = 7;
        world.end_run(10);
        world.enter(GameState::Highscore, 20);

        draw_world(&world, &Settings::default(), &mut fb).unwrap();
        assert!(fb.has_label("HIGHSCORES"));
        assert!(fb.has_label("1. 7"));

        world.blink_visible = false;
        draw_world(&world, &Settings::default(), &mut fb).unwrap();
        assert!(!fb.has_label("1. 7"));
        assert!(fb.has_label("2. 5"));

        let steady = Settings {
            blink_new_highscore: false,
            ..Settings::default()
        };
        draw_world(&world, &steady, &mut fb).unwrap();
        assert!(fb.has_label("1. 7"));
    }
}
