/*!
`mana_idle` — the fixed-tick simulation core of a four-producer idle game.

What it does
- Owns all game state in one explicit [`GameState`]: the mana pool, four
  producers, the tick accumulator, and the cached aggregate multiplier.
- `advance()` runs one 1/60 s tick:
  * every 60 ticks, credit `total_multiplier` mana (one multiplier-second);
  * every active producer rotates at `speed_per_level * level` rev/s, and each
    completed revolution adds `0.01` to its multiplier.
- `purchase(id)` spends mana for one level; the cost then grows geometrically.
  Ineligible purchases are a no-op reported as a [`PurchaseOutcome`].
- `snapshot()` returns a read-only [`Snapshot`] for rendering.

How to use (call surface only)
- `let mut st = GameState::new();`
- Call `st.advance()` once per fixed tick, `st.purchase(id)` on a click.
- Hosts with variable frame times use `systems::frame_clock::FrameClock` (or
  `presentation::Session`) to turn wall time into whole ticks.

What it does NOT do
- No rendering, no persistence, no networking. Painting belongs to the host
  and reads snapshots only.
*/

pub mod error;
pub mod mechanics;
pub mod producer;
pub mod snapshot;
pub mod state;
pub mod systems;

#[cfg(feature = "presentation")]
pub mod presentation;

pub use error::Error;
pub use producer::{INITIAL_MULTIPLIER, MAX_LEVEL, MULTIPLIER_STEP, Producer, ProducerId, ProducerSpec};
pub use snapshot::{ProducerView, Snapshot};
pub use state::{GameState, TICKS_PER_SECOND, TickReport};
pub use systems::purchase::PurchaseOutcome;
