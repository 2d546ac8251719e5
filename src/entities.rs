/// All game entity types — pure data, no logic.

// ── Configuration ─────────────────────────────────────────────────────────────

/// Fixed game constants, gathered into one struct instead of module-level
/// globals.  All coordinates are logical pixels on a 1600×900 canvas; the
/// display layer scales them onto the terminal cell grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Logical canvas width.
    pub width: i32,
    /// Logical canvas height.
    pub height: i32,
    /// Number of bomb slots filled at game start.  Slots are tombstoned on
    /// destruction, never refilled.
    pub bomb_count: usize,
    /// Player movement per held direction key per frame (also the unit of the
    /// 8-way facing vector components).
    pub step: i32,
    /// Beam speed per frame along each facing axis.
    pub beam_speed: i32,
    /// Bomb speed per frame along each velocity axis.
    pub bomb_speed: i32,
    /// Bomb radius is drawn uniformly from this inclusive range.
    pub min_bomb_radius: i32,
    pub max_bomb_radius: i32,
    /// Player sprite edge length (square).
    pub player_size: i32,
    /// Beam sprite edge length (square).
    pub beam_size: i32,
    /// Explosion sprite edge length (square).
    pub explosion_size: i32,
    /// Frames an explosion stays alive after spawning.
    pub explosion_life: i32,
    /// How long the final game-over frame is held on screen before exit.
    pub game_over_hold_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 1600,
            height: 900,
            bomb_count: 3,
            step: 5,
            beam_speed: 5,
            bomb_speed: 5,
            min_bomb_radius: 5,
            max_bomb_radius: 30,
            player_size: 40,
            beam_size: 20,
            explosion_size: 40,
            explosion_life: 10,
            game_over_hold_ms: 1000,
        }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn from_center(cx: i32, cy: i32, width: i32, height: i32) -> Rect {
        Rect {
            left: cx - width / 2,
            top: cy - height / 2,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.left + self.width / 2, self.top + self.height / 2)
    }

    /// A copy translated by (dx, dy).
    pub fn shifted(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    /// Bounding-box overlap test.  Rectangles that merely touch along an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Which sprite variant the player shows this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Look {
    Normal,
    /// Shown for the single frame a beam destroys a bomb.
    Cheer,
    /// Shown on the final game-over frame.
    Defeated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// 8-way facing vector, components in {-step, 0, +step}, never (0, 0).
    /// Idle input retains the previous value.
    pub dire: (i32, i32),
    pub look: Look,
}

// ── Bomb ──────────────────────────────────────────────────────────────────────

/// The fixed six-colour bomb palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BombColor {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl BombColor {
    pub const PALETTE: [BombColor; 6] = [
        BombColor::Red,
        BombColor::Green,
        BombColor::Blue,
        BombColor::Yellow,
        BombColor::Magenta,
        BombColor::Cyan,
    ];
}

/// A bouncing circular hazard.  All randomness happens at construction; after
/// that the bomb moves deterministically, flipping a velocity component
/// whenever the matching canvas bound is crossed.
#[derive(Clone, Debug, PartialEq)]
pub struct Bomb {
    /// The circle's enclosing square (2·radius per side).
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
    pub radius: i32,
    pub color: BombColor,
}

// ── Beam ──────────────────────────────────────────────────────────────────────

/// The player's shot.  It carries no self-termination state; the tick retires
/// it when it leaves the canvas or strikes a bomb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beam {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
}

// ── Explosion ─────────────────────────────────────────────────────────────────

/// Short-lived animation at a destroyed bomb's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Explosion {
    pub rect: Rect,
    /// Remaining frames; the entry is dropped once this reaches 0.
    pub life: i32,
}

impl Explosion {
    /// Which of the 4 flip-variant animation frames to show.
    pub fn frame_index(&self) -> usize {
        self.life.rem_euclid(4) as usize
    }
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Which keys the loop considers held this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire game state.  Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: Config,
    pub player: Player,
    /// Fixed-length slot collection; destroyed bombs become `None` and the
    /// collection is never compacted, so indices stay stable mid-frame.
    pub bombs: Vec<Option<Bomb>>,
    /// At most one beam exists at any frame boundary.
    pub beam: Option<Beam>,
    pub explosions: Vec<Explosion>,
    pub status: GameStatus,
    pub frame: u64,
}
