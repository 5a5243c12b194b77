use crate::neko_sprites::NekoSprite;

mod neko_config;
pub use neko_config::*;

mod neko_player;
pub use neko_player::*;

// Hold time of a running frame, five walk steps are taken per frame
pub const RUN_FRAME_MS: u32 = 250;
pub const RUN_STEPS_PER_FRAME: usize = 5;
// Hold time of each claw sharpening frame, and how often the pair repeats
pub const CLAW_FRAME_MS: u32 = 333;
pub const CLAW_REPEAT: usize = 4;

/// Fixed two-frame animations, each frame with its hold time in ms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NekoCycle {
    Wake,
    Lick,
    Scratch,
    Yawn,
    Sleep,
}

impl NekoCycle {
    pub fn frames(self) -> &'static [(NekoSprite, u32); 2] {
        match self {
            NekoCycle::Wake => &[(NekoSprite::Awake, 500), (NekoSprite::Still, 500)],
            NekoCycle::Lick => &[(NekoSprite::Still, 500), (NekoSprite::Lick, 500)],
            NekoCycle::Scratch => &[(NekoSprite::Itch1, 500), (NekoSprite::Itch2, 500)],
            NekoCycle::Yawn => &[(NekoSprite::Still, 1000), (NekoSprite::Yawn, 1500)],
            NekoCycle::Sleep => &[(NekoSprite::Sleep1, 500), (NekoSprite::Sleep2, 500)],
        }
    }

    pub fn duration_ms(self) -> u32 {
        self.frames().iter().map(|(_, ms)| ms).sum()
    }
}
