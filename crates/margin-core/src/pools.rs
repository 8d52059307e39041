use crate::section::Section;

pub type Rgb = [u8; 3];

/// Vocabulary and tints shown while a section is dominant.
#[derive(Debug)]
pub struct WordPool {
    /// Words that ride down the rain columns.
    pub rain: &'static [&'static str],
    /// Words that flash as popups.
    pub popup: &'static [&'static str],
    pub colors: &'static [Rgb],
}

static HERO: WordPool = WordPool {
    rain: &[
        "boot", "init", "./run", "whoami", "> _", "~", "ping", "connect", "handshake", "hello",
        "0x00", "start", "load", "ready", "exec", "spawn",
    ],
    popup: &[
        "INIT", "BOOT", "> _", "HELLO", "CONNECT", "PING", "READY", "LOAD", "START", "HANDSHAKE",
        "./run.sh", "SPAWN",
    ],
    colors: &[[90, 153, 96], [100, 100, 180], [180, 180, 100]],
};

static PROJECTS: WordPool = WordPool {
    rain: &[
        "/focused", "v1.0", "burnlab", "shipped", "apk", "chmod +x", "build", "adb", "deploy",
        "kill -9", "git push", "rm -rf", "diff", "merge", "compile", "link",
    ],
    popup: &[
        "SHIPPED", "DEPLOY", "BUILD", "APK", "CHMOD", "GIT PUSH", "COMPILE", "LIVE", "v1.0",
        "BURNLAB", "FOCUSED", "KEY4CE", "MERGE",
    ],
    colors: &[[90, 153, 96], [138, 112, 64], [90, 90, 180]],
};

static ABOUT: WordPool = WordPool {
    rain: &[
        "student", "builder", "iterate", "break it", "ship it", "learn", "repeat", "why not",
        "just build", "try it", "debug", "read", "write", "think",
    ],
    popup: &[
        "BUILDER", "ITERATE", "SHIP IT", "LEARN", "REPEAT", "WHY NOT", "STUDENT", "DEBUG", "THINK",
        "BREAK IT", "BUILD FIRST",
    ],
    colors: &[[120, 120, 200], [90, 153, 96], [160, 120, 80]],
};

static CONTACT: WordPool = WordPool {
    rain: &[
        "@lonemagma", "mailto:", "reach out", "open", "ping me", "ssh", "connect", "DM open", "hey",
        "talk", "lonemagma29",
    ],
    popup: &[
        "@LONEMAGMA", "PING ME", "REACH OUT", "OPEN", "CONNECT", "SSH", "DM OPEN", "TALK", "HEY",
        "MAILTO:",
    ],
    colors: &[[90, 153, 96], [160, 90, 90], [90, 130, 180]],
};

#[inline]
pub fn pool_for(section: Section) -> &'static WordPool {
    match section {
        Section::Hero => &HERO,
        Section::Projects => &PROJECTS,
        Section::About => &ABOUT,
        Section::Contact => &CONTACT,
    }
}
