use blaster_game::entities::Movement;
use blaster_game::input::*;

#[test]
fn steering_keys_in_either_case() {
    for key in ['h', 'H'] {
        assert_eq!(map_key_down(key), Some(Command::SetMovement(Movement::Left)));
    }
    for key in ['l', 'L'] {
        assert_eq!(map_key_down(key), Some(Command::SetMovement(Movement::Right)));
    }
}

#[test]
fn space_fires_and_q_quits() {
    assert_eq!(map_key_down(' '), Some(Command::FireLaser));
    assert_eq!(map_key_down('q'), Some(Command::Quit));
    assert_eq!(map_key_down('Q'), Some(Command::Quit));
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(map_key_down('a'), None);
    assert_eq!(map_key_down('d'), None);
    assert_eq!(map_key_up(' '), None);
    assert_eq!(map_key_up('q'), None);
}

#[test]
fn any_steering_release_clears_movement() {
    for key in ['h', 'H', 'l', 'L'] {
        assert_eq!(map_key_up(key), Some(Command::SetMovement(Movement::None)));
    }
}

// ── HoldTracker ───────────────────────────────────────────────────────────────

#[test]
fn first_press_survives_until_auto_repeat_starts() {
    let mut hold = HoldTracker::new();
    hold.press('h', 0);
    // A typical 300 ms repeat delay must not look like a release.
    assert_eq!(hold.expire(300), None);
    hold.press('h', 300);
    assert_eq!(hold.expire(400), None);
}

#[test]
fn repeats_use_the_short_window() {
    let mut hold = HoldTracker::new();
    hold.press('l', 0);
    hold.press('l', 400);
    assert_eq!(hold.deadline(), Some(400 + REPEAT_HOLD_MS));
    assert_eq!(hold.expire(400 + REPEAT_HOLD_MS - 1), None);
    assert_eq!(hold.expire(400 + REPEAT_HOLD_MS), Some('l'));
    assert_eq!(hold.deadline(), None);
}

#[test]
fn single_tap_releases_after_grace() {
    let mut hold = HoldTracker::new();
    hold.press('h', 1000);
    assert_eq!(hold.deadline(), Some(1000 + FIRST_REPEAT_GRACE_MS));
    assert_eq!(hold.expire(1000 + FIRST_REPEAT_GRACE_MS), Some('h'));
    assert_eq!(hold.expire(5000), None);
}

#[test]
fn switching_keys_restarts_the_grace() {
    let mut hold = HoldTracker::new();
    hold.press('h', 0);
    hold.press('h', 300);
    hold.press('l', 350);
    assert_eq!(hold.deadline(), Some(350 + FIRST_REPEAT_GRACE_MS));
}
