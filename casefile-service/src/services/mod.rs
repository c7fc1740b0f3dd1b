pub mod metrics;
pub mod prompts;
pub mod providers;
pub mod random;
pub mod router;

pub use self::metrics::{get_metrics, init_metrics};
pub use prompts::{build_prompt, PromptSpec};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use router::ActionRouter;
