use bomb_buster::entities::*;

// ── Rect geometry ─────────────────────────────────────────────────────────────

#[test]
fn rect_from_center_round_trips() {
    let r = Rect::from_center(800, 450, 40, 40);
    assert_eq!(r.left, 780);
    assert_eq!(r.top, 430);
    assert_eq!(r.right(), 820);
    assert_eq!(r.bottom(), 470);
    assert_eq!(r.center(), (800, 450));
}

#[test]
fn rect_shifted_translates_only() {
    let r = Rect::from_center(100, 100, 20, 20);
    let moved = r.shifted(5, -5);
    assert_eq!(moved.center(), (105, 95));
    assert_eq!(moved.width, 20);
    assert_eq!(moved.height, 20);
}

#[test]
fn rect_intersects_on_overlap() {
    let a = Rect::from_center(100, 100, 40, 40);
    let b = Rect::from_center(120, 110, 40, 40);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rect_no_intersection_when_disjoint() {
    let a = Rect::from_center(100, 100, 40, 40);
    let b = Rect::from_center(300, 300, 40, 40);
    assert!(!a.intersects(&b));
}

#[test]
fn rect_edge_touch_is_not_intersection() {
    // b starts exactly where a ends
    let a = Rect { left: 0, top: 0, width: 40, height: 40 };
    let b = Rect { left: 40, top: 0, width: 40, height: 40 };
    assert!(!a.intersects(&b));
}

#[test]
fn rect_containment_is_intersection() {
    let outer = Rect::from_center(100, 100, 100, 100);
    let inner = Rect::from_center(100, 100, 10, 10);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

// ── Explosion animation frames ────────────────────────────────────────────────

#[test]
fn explosion_frame_index_cycles_through_four_variants() {
    let rect = Rect::from_center(0, 0, 40, 40);
    let indices: Vec<usize> = (1..=10)
        .rev()
        .map(|life| Explosion { rect, life }.frame_index())
        .collect();
    // life 10 → 2, 9 → 1, 8 → 0, 7 → 3, ...
    assert_eq!(indices, vec![2, 1, 0, 3, 2, 1, 0, 3, 2, 1]);
    assert!(indices.iter().all(|&i| i < 4));
}

// ── Config defaults ───────────────────────────────────────────────────────────

#[test]
fn config_default_matches_canvas_constants() {
    let cfg = Config::default();
    assert_eq!(cfg.width, 1600);
    assert_eq!(cfg.height, 900);
    assert_eq!(cfg.bomb_count, 3);
    assert_eq!(cfg.step, 5);
    assert_eq!(cfg.explosion_life, 10);
    assert_eq!((cfg.min_bomb_radius, cfg.max_bomb_radius), (5, 30));
}

#[test]
fn held_keys_default_is_all_released() {
    let held = HeldKeys::default();
    assert!(!held.up && !held.down && !held.left && !held.right && !held.fire);
}

// ── Clone & equality semantics ────────────────────────────────────────────────

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(Look::Normal, Look::Normal);
    assert_ne!(Look::Cheer, Look::Defeated);
    assert_ne!(BombColor::Red, BombColor::Cyan);

    let color = BombColor::Magenta;
    assert_eq!(color, BombColor::Magenta);
    assert_eq!(BombColor::PALETTE.len(), 6);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        config: Config::default(),
        player: Player {
            rect: Rect::from_center(800, 450, 40, 40),
            dire: (5, 0),
            look: Look::Normal,
        },
        bombs: vec![None, None, None],
        beam: None,
        explosions: Vec::new(),
        status: GameStatus::Playing,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect = Rect::from_center(0, 0, 40, 40);
    cloned.frame = 99;
    cloned.explosions.push(Explosion {
        rect: Rect::from_center(10, 10, 40, 40),
        life: 10,
    });

    assert_eq!(original.player.rect.center(), (800, 450));
    assert_eq!(original.frame, 0);
    assert!(original.explosions.is_empty());
}
