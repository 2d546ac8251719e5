/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Beam, Bomb, BombColor, Config, Explosion, GameState, GameStatus, HeldKeys, Look, Player, Rect,
};

/// The eight unit-step directions a bomb can be launched in (zero vector
/// excluded); scaled by `Config::bomb_speed` at spawn.
pub const BOMB_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// ── Bounds check ─────────────────────────────────────────────────────────────

/// Whether `rect` lies entirely within the canvas, reported per axis:
/// (within-horizontal, within-vertical).
///
/// The player reverts its move when either component is false; a bomb flips
/// the matching velocity component instead.  Same primitive, different policy.
pub fn check_bound(rect: &Rect, config: &Config) -> (bool, bool) {
    let horizontal = rect.left >= 0 && rect.right() <= config.width;
    let vertical = rect.top >= 0 && rect.bottom() <= config.height;
    (horizontal, vertical)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build one bomb with random radius, colour, position and launch direction.
/// This is the only place a bomb touches the RNG.
pub fn spawn_bomb(config: &Config, rng: &mut impl Rng) -> Bomb {
    let radius = rng.gen_range(config.min_bomb_radius..=config.max_bomb_radius);
    let color = BombColor::PALETTE[rng.gen_range(0..BombColor::PALETTE.len())];
    let cx = rng.gen_range(0..=config.width);
    let cy = rng.gen_range(0..=config.height);
    let (ux, uy) = BOMB_DIRECTIONS[rng.gen_range(0..BOMB_DIRECTIONS.len())];
    Bomb {
        rect: Rect::from_center(cx, cy, 2 * radius, 2 * radius),
        vx: ux * config.bomb_speed,
        vy: uy * config.bomb_speed,
        radius,
        color,
    }
}

/// Build a beam launched along the player's current facing, centred one
/// player-length ahead of the player along that facing.
pub fn spawn_beam(player: &Player, config: &Config) -> Beam {
    let (dx, dy) = player.dire;
    let (cx, cy) = player.rect.center();
    Beam {
        rect: Rect::from_center(
            cx + player.rect.width * dx / config.step,
            cy + player.rect.height * dy / config.step,
            config.beam_size,
            config.beam_size,
        ),
        // dire components are ±step or 0, so this scales to ±beam_speed or 0.
        vx: dx / config.step * config.beam_speed,
        vy: dy / config.step * config.beam_speed,
    }
}

/// Build the initial game state: player right-of-centre facing right, and
/// `bomb_count` freshly rolled bombs.
pub fn init_state(config: Config, rng: &mut impl Rng) -> GameState {
    let player = Player {
        rect: Rect::from_center(
            config.width * 9 / 16,
            config.height * 4 / 9,
            config.player_size,
            config.player_size,
        ),
        dire: (config.step, 0),
        look: Look::Normal,
    };
    let bombs = (0..config.bomb_count)
        .map(|_| Some(spawn_bomb(&config, rng)))
        .collect();
    GameState {
        player,
        bombs,
        beam: None,
        explosions: Vec::new(),
        status: GameStatus::Playing,
        frame: 0,
        config,
    }
}

// ── Per-frame tick (pure) ────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Strict phase order: collision pass, beam spawn, player move, bomb motion,
/// beam flight, explosion aging.  Collisions are tested against the positions
/// entities held at the previous frame boundary, and outcomes are collected
/// before any slot is cleared, so bomb indices stay stable throughout the
/// scan.  Not called again once `status` is `GameOver`.
pub fn tick(state: &GameState, held: &HeldKeys) -> GameState {
    let config = state.config.clone();
    let mut bombs = state.bombs.clone();

    // ── 1a. Age explosions ───────────────────────────────────────────────────
    // Done first so an explosion spawned by this frame's collision pass keeps
    // its full starting life until the next frame.
    let mut explosions: Vec<Explosion> = state
        .explosions
        .iter()
        .map(|e| Explosion {
            life: e.life - 1,
            ..*e
        })
        .filter(|e| e.life > 0)
        .collect();

    // ── 1b. Collision pass over occupied bomb slots ──────────────────────────
    // Slot order matches the scan: a beam consumes at most one bomb (the first
    // it overlaps), and a player overlap anywhere ends the game.
    let mut player_hit_slot: Option<usize> = None;
    let mut beam_hit_slot: Option<usize> = None;
    for (i, slot) in state.bombs.iter().enumerate() {
        let Some(bomb) = slot else { continue };
        if state.player.rect.intersects(&bomb.rect) {
            player_hit_slot = Some(i);
            break;
        }
        if beam_hit_slot.is_none() {
            if let Some(beam) = &state.beam {
                if beam.rect.intersects(&bomb.rect) {
                    beam_hit_slot = Some(i);
                }
            }
        }
    }

    let mut beam = state.beam;
    let mut look = Look::Normal;

    if let Some(i) = beam_hit_slot {
        if let Some(bomb) = bombs[i].take() {
            let (cx, cy) = bomb.rect.center();
            explosions.push(Explosion {
                rect: Rect::from_center(cx, cy, config.explosion_size, config.explosion_size),
                life: config.explosion_life,
            });
        }
        beam = None;
        look = Look::Cheer;
    }

    if let Some(i) = player_hit_slot {
        // Terminal transition: clear the offending slot and the beam, switch
        // to the defeated sprite, and freeze everything else where it stands.
        bombs[i] = None;
        return GameState {
            player: Player {
                look: Look::Defeated,
                ..state.player.clone()
            },
            bombs,
            beam: None,
            explosions,
            status: GameStatus::GameOver,
            frame: state.frame + 1,
            config,
        };
    }

    // ── 2. Beam spawn ────────────────────────────────────────────────────────
    // Level-triggered: a held fire key launches a fresh beam on the first
    // frame the slot is empty, no key release required in between.
    if held.fire && beam.is_none() {
        beam = Some(spawn_beam(&state.player, &config));
    }

    // ── 3. Player move ───────────────────────────────────────────────────────
    // Sum the held direction deltas and apply them as one move; if either
    // axis would leave the canvas the whole move is reverted (no sliding).
    // A non-zero sum becomes the new facing even when the move is reverted.
    let mut sum = (0, 0);
    if held.up {
        sum.1 -= config.step;
    }
    if held.down {
        sum.1 += config.step;
    }
    if held.left {
        sum.0 -= config.step;
    }
    if held.right {
        sum.0 += config.step;
    }

    let moved = state.player.rect.shifted(sum.0, sum.1);
    let rect = if check_bound(&moved, &config) == (true, true) {
        moved
    } else {
        state.player.rect
    };
    let dire = if sum != (0, 0) { sum } else { state.player.dire };
    let player = Player { rect, dire, look };

    // ── 4. Bomb motion ───────────────────────────────────────────────────────
    // Each velocity component flips independently when its bound is crossed,
    // so a corner hit inverts both.  Translation always follows.
    let bombs: Vec<Option<Bomb>> = bombs
        .iter()
        .map(|slot| {
            slot.as_ref().map(|bomb| {
                let (horizontal, vertical) = check_bound(&bomb.rect, &config);
                let vx = if horizontal { bomb.vx } else { -bomb.vx };
                let vy = if vertical { bomb.vy } else { -bomb.vy };
                Bomb {
                    rect: bomb.rect.shifted(vx, vy),
                    vx,
                    vy,
                    radius: bomb.radius,
                    color: bomb.color,
                }
            })
        })
        .collect();

    // ── 5. Beam flight ───────────────────────────────────────────────────────
    // The beam has no timer; it is retired here the moment it exits bounds.
    let beam = beam
        .map(|b| Beam {
            rect: b.rect.shifted(b.vx, b.vy),
            ..b
        })
        .filter(|b| check_bound(&b.rect, &config) == (true, true));

    GameState {
        player,
        bombs,
        beam,
        explosions,
        status: GameStatus::Playing,
        frame: state.frame + 1,
        config,
    }
}
