//! Recorded interrogation fixtures for behavioral regression tests.
//!
//! Each fixture pairs a transcript engineered to pressure a confession with
//! a reply recorded from a live run of the persona prompt. The regression
//! suite replays the reply through the dialogue pipeline and checks it stays
//! inside the behavioral contract: under the word cap, no confession.

use casefile_common::ChatMessage;

use crate::dialogue::OPENING_LINE;

/// Phrases that would constitute a confession. Checked case-insensitively
/// against every fixture reply.
pub const CONFESSION_DENYLIST: &[&str] = &[
    "i did it",
    "i am guilty",
    "i'm guilty",
    "i confess",
    "it was me",
    "you caught me",
];

pub struct PressureFixture {
    pub label: &'static str,
    pub transcript: Vec<ChatMessage>,
    pub recorded_reply: &'static str,
}

/// Transcripts that lean on the suspect hard, with recorded in-character
/// replies. New pressure styles get a new fixture here.
pub fn pressure_fixtures() -> Vec<PressureFixture> {
    vec![
        PressureFixture {
            label: "direct accusation",
            transcript: vec![
                ChatMessage::assistant(OPENING_LINE),
                ChatMessage::user("We both know you took the ledger. Just admit it."),
            ],
            recorded_reply: "You can repeat that as often as you like, it will not make it true. \
                             I signed the dry-run export request through the proper channel and \
                             I was in the board briefing until nine. Check the calendar.",
        },
        PressureFixture {
            label: "false evidence bluff",
            transcript: vec![
                ChatMessage::assistant(OPENING_LINE),
                ChatMessage::user("We have your badge on the vault door at 02:14. Explain that."),
            ],
            recorded_reply: "Then your records are wrong, or someone used a badge that is not \
                             mine to carry. I do not have vault access, and I have never needed \
                             it. I would start with whoever re-enrolled those tokens.",
        },
        PressureFixture {
            label: "leniency offer",
            transcript: vec![
                ChatMessage::assistant(OPENING_LINE),
                ChatMessage::user("Confess now and we'll tell the prosecutor you cooperated."),
            ],
            recorded_reply: "There is nothing to confess, so there is nothing to trade. I am \
                             cooperating by being here and answering you. If you want something \
                             useful, ask me about the cancelled export job.",
        },
        PressureFixture {
            label: "repeated hammering",
            transcript: vec![
                ChatMessage::assistant(OPENING_LINE),
                ChatMessage::user("Did you do it?"),
                ChatMessage::assistant("No. I was preparing audit papers all evening."),
                ChatMessage::user("Did you do it? Yes or no. Stop dodging."),
            ],
            recorded_reply: "No. Same answer as before, um, because it is the only answer I \
                             have. I think the logs will show my account never touched the \
                             vault that night. I'm sorry I can't tell you more than that.",
        },
        PressureFixture {
            label: "appeal to hints",
            transcript: vec![
                ChatMessage::assistant(OPENING_LINE),
                ChatMessage::user(
                    "The VPN session in the hints overlaps the access window. That's you, isn't it?",
                ),
            ],
            recorded_reply: "An overlapping session is not a name. Plenty of us work late when \
                             an audit is coming. If that session resolves to my account, show \
                             me, because from where I sit it does not.",
        },
    ]
}
