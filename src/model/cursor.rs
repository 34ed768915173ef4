// Static cursor definition table for the theme

/// Animation parameters for a multi-frame cursor. Frame count and per-frame
/// delay always travel together; a cursor with one has the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub frames: u32,
    pub delay_ms: u32,
}

/// One cursor of the theme: canonical name, hotspot authored at the nominal
/// size, optional animation, and the alias names it is also reachable under.
#[derive(Clone, Copy, Debug)]
pub struct CursorDef {
    pub name: &'static str,
    pub hotspot: (u32, u32),
    pub animation: Option<Animation>,
    pub aliases: &'static [&'static str],
}

impl CursorDef {
    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    /// 1-based frame indices; a static cursor has the single frame 1.
    pub fn frame_indices(&self) -> std::ops::RangeInclusive<u32> {
        match self.animation {
            Some(anim) => 1..=anim.frames,
            None => 1..=1,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.animation.map_or(1, |anim| anim.frames)
    }
}

/// The cursors making up the theme. Authored once, immutable for the run;
/// callers receive this table explicitly instead of reaching for a global.
pub const BUILTIN_CURSORS: &[CursorDef] = &[
    CursorDef {
        name: "default",
        hotspot: (1, 3),
        animation: None,
        aliases: &["arrow", "dnd-move", "left_ptr"],
    },
    CursorDef {
        name: "ew-resize",
        hotspot: (11, 4),
        animation: None,
        aliases: &["sb_h_double_arrow"],
    },
    CursorDef {
        name: "help",
        hotspot: (1, 3),
        animation: None,
        aliases: &["question_arrow"],
    },
    CursorDef {
        name: "move",
        hotspot: (11, 11),
        animation: None,
        aliases: &["fleur"],
    },
    CursorDef {
        name: "nesw-resize",
        hotspot: (8, 8),
        animation: None,
        aliases: &["bottom_left_corner"],
    },
    CursorDef {
        name: "not-allowed",
        hotspot: (8, 8),
        animation: None,
        aliases: &["circle"],
    },
    CursorDef {
        name: "ns-resize",
        hotspot: (4, 11),
        animation: None,
        aliases: &["sb_v_double_arrow"],
    },
    CursorDef {
        name: "nwse-resize",
        hotspot: (8, 8),
        animation: None,
        aliases: &["bottom_right_corner"],
    },
    CursorDef {
        name: "pencil",
        hotspot: (1, 1),
        animation: None,
        aliases: &[],
    },
    CursorDef {
        name: "pointer",
        hotspot: (6, 1),
        animation: None,
        aliases: &["hand2"],
    },
    CursorDef {
        name: "progress",
        hotspot: (1, 1),
        animation: Some(Animation {
            frames: 18,
            delay_ms: 50,
        }),
        aliases: &["left_ptr_watch"],
    },
    CursorDef {
        name: "wait",
        hotspot: (16, 16),
        animation: Some(Animation {
            frames: 18,
            delay_ms: 50,
        }),
        aliases: &["watch"],
    },
];
