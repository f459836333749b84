//! `0xFC`-prefixed opcodes: saturating truncation, bulk memory and table operations.

use super::{Entry, instr};

/// Entries behind the `0xFC` prefix, in sub-opcode order.
pub(super) static MISC: &[Entry] = &[
    // ── Saturating truncation ───────────────────────────────────────
    instr(r"\I32.\TRUNC\K{\_sat\_}\F32\K{\_s}", r"\hex{FC}~\hex{00}", r"[\F32] \to [\I32]"),
    instr(r"\I32.\TRUNC\K{\_sat\_}\F32\K{\_u}", r"\hex{FC}~\hex{01}", r"[\F32] \to [\I32]"),
    instr(r"\I32.\TRUNC\K{\_sat\_}\F64\K{\_s}", r"\hex{FC}~\hex{02}", r"[\F64] \to [\I32]"),
    instr(r"\I32.\TRUNC\K{\_sat\_}\F64\K{\_u}", r"\hex{FC}~\hex{03}", r"[\F64] \to [\I32]"),
    instr(r"\I64.\TRUNC\K{\_sat\_}\F32\K{\_s}", r"\hex{FC}~\hex{04}", r"[\F32] \to [\I64]"),
    instr(r"\I64.\TRUNC\K{\_sat\_}\F32\K{\_u}", r"\hex{FC}~\hex{05}", r"[\F32] \to [\I64]"),
    instr(r"\I64.\TRUNC\K{\_sat\_}\F64\K{\_s}", r"\hex{FC}~\hex{06}", r"[\F64] \to [\I64]"),
    instr(r"\I64.\TRUNC\K{\_sat\_}\F64\K{\_u}", r"\hex{FC}~\hex{07}", r"[\F64] \to [\I64]"),
    // ── Bulk memory ─────────────────────────────────────────────────
    instr(r"\MEMORYINIT~x", r"\hex{FC}~\hex{08}", r"[\I32~\I32~\I32] \to []"),
    instr(r"\DATADROP~x", r"\hex{FC}~\hex{09}", r"[] \to []"),
    instr(r"\MEMORYCOPY", r"\hex{FC}~\hex{0A}", r"[\I32~\I32~\I32] \to []"),
    instr(r"\MEMORYFILL", r"\hex{FC}~\hex{0B}", r"[\I32~\I32~\I32] \to []"),
    // ── Table ───────────────────────────────────────────────────────
    instr(r"\TABLEINIT~x~y", r"\hex{FC}~\hex{0C}", r"[\I32~\I32~\I32] \to []"),
    instr(r"\ELEMDROP~x", r"\hex{FC}~\hex{0D}", r"[] \to []"),
    instr(r"\TABLECOPY~x~y", r"\hex{FC}~\hex{0E}", r"[\I32~\I32~\I32] \to []"),
    instr(r"\TABLEGROW~x", r"\hex{FC}~\hex{0F}", r"[t~\I32] \to [\I32]"),
    instr(r"\TABLESIZE~x", r"\hex{FC}~\hex{10}", r"[] \to [\I32]"),
    instr(r"\TABLEFILL~x", r"\hex{FC}~\hex{11}", r"[\I32~t~\I32] \to []"),
];
