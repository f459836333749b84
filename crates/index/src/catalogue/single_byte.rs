//! Single-byte opcodes `0x00` through `0xFB`.
//!
//! Unassigned byte values are kept as [`Entry::Reserved`] so the table stays a dense
//! image of the encoding space.

use super::{Entry, instr, reserved, structural};

/// One entry per byte value, in encoding order.
pub(super) static SINGLE_BYTE: &[Entry] = &[
    // ── Control ─────────────────────────────────────────────────────
    instr(r"\UNREACHABLE", r"\hex{00}", r"[t_1^\ast] \to [t_2^\ast]"),
    instr(r"\NOP", r"\hex{01}", r"[] \to []"),
    instr(r"\BLOCK~\X{bt}", r"\hex{02}", r"[t_1^\ast] \to [t_2^\ast]"),
    instr(r"\LOOP~\X{bt}", r"\hex{03}", r"[t_1^\ast] \to [t_2^\ast]"),
    instr(r"\IF~\X{bt}", r"\hex{04}", r"[t_1^\ast~\I32] \to [t_2^\ast]"),
    structural(r"\ELSE", r"\hex{05}"),
    reserved(r"\hex{06}"),
    reserved(r"\hex{07}"),
    reserved(r"\hex{08}"),
    reserved(r"\hex{09}"),
    reserved(r"\hex{0A}"),
    structural(r"\END", r"\hex{0B}"),
    instr(r"\BR~l", r"\hex{0C}", r"[t_1^\ast~t^\ast] \to [t_2^\ast]"),
    instr(r"\BRIF~l", r"\hex{0D}", r"[t^\ast~\I32] \to [t^\ast]"),
    instr(r"\BRTABLE~l^\ast~l", r"\hex{0E}", r"[t_1^\ast~t^\ast~\I32] \to [t_2^\ast]"),
    instr(r"\RETURN", r"\hex{0F}", r"[t_1^\ast~t^\ast] \to [t_2^\ast]"),
    instr(r"\CALL~x", r"\hex{10}", r"[t_1^\ast] \to [t_2^\ast]"),
    instr(r"\CALLINDIRECT~x~y", r"\hex{11}", r"[t_1^\ast~\I32] \to [t_2^\ast]"),
    reserved(r"\hex{12}"),
    reserved(r"\hex{13}"),
    reserved(r"\hex{14}"),
    reserved(r"\hex{15}"),
    reserved(r"\hex{16}"),
    reserved(r"\hex{17}"),
    reserved(r"\hex{18}"),
    reserved(r"\hex{19}"),
    // ── Parametric ──────────────────────────────────────────────────
    instr(r"\DROP", r"\hex{1A}", r"[t] \to []"),
    instr(r"\SELECT", r"\hex{1B}", r"[t~t~\I32] \to [t]"),
    instr(r"\SELECT~t", r"\hex{1C}", r"[t~t~\I32] \to [t]"),
    reserved(r"\hex{1D}"),
    reserved(r"\hex{1E}"),
    reserved(r"\hex{1F}"),
    // ── Variable ────────────────────────────────────────────────────
    instr(r"\LOCALGET~x", r"\hex{20}", r"[] \to [t]"),
    instr(r"\LOCALSET~x", r"\hex{21}", r"[t] \to []"),
    instr(r"\LOCALTEE~x", r"\hex{22}", r"[t] \to [t]"),
    instr(r"\GLOBALGET~x", r"\hex{23}", r"[] \to [t]"),
    instr(r"\GLOBALSET~x", r"\hex{24}", r"[t] \to []"),
    // ── Table ───────────────────────────────────────────────────────
    instr(r"\TABLEGET~x", r"\hex{25}", r"[\I32] \to [t]"),
    instr(r"\TABLESET~x", r"\hex{26}", r"[\I32~t] \to []"),
    reserved(r"\hex{27}"),
    // ── Memory ──────────────────────────────────────────────────────
    instr(r"\I32.\LOAD~\memarg", r"\hex{28}", r"[\I32] \to [\I32]"),
    instr(r"\I64.\LOAD~\memarg", r"\hex{29}", r"[\I32] \to [\I64]"),
    instr(r"\F32.\LOAD~\memarg", r"\hex{2A}", r"[\I32] \to [\F32]"),
    instr(r"\F64.\LOAD~\memarg", r"\hex{2B}", r"[\I32] \to [\F64]"),
    instr(r"\I32.\LOAD\K{8\_s}~\memarg", r"\hex{2C}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\LOAD\K{8\_u}~\memarg", r"\hex{2D}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\LOAD\K{16\_s}~\memarg", r"\hex{2E}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\LOAD\K{16\_u}~\memarg", r"\hex{2F}", r"[\I32] \to [\I32]"),
    instr(r"\I64.\LOAD\K{8\_s}~\memarg", r"\hex{30}", r"[\I32] \to [\I64]"),
    instr(r"\I64.\LOAD\K{8\_u}~\memarg", r"\hex{31}", r"[\I32] \to [\I64]"),
    instr(r"\I64.\LOAD\K{16\_s}~\memarg", r"\hex{32}", r"[\I32] \to [\I64]"),
    instr(r"\I64.\LOAD\K{16\_u}~\memarg", r"\hex{33}", r"[\I32] \to [\I64]"),
    instr(r"\I64.\LOAD\K{32\_s}~\memarg", r"\hex{34}", r"[\I32] \to [\I64]"),
    instr(r"\I64.\LOAD\K{32\_u}~\memarg", r"\hex{35}", r"[\I32] \to [\I64]"),
    instr(r"\I32.\STORE~\memarg", r"\hex{36}", r"[\I32~\I32] \to []"),
    instr(r"\I64.\STORE~\memarg", r"\hex{37}", r"[\I32~\I64] \to []"),
    instr(r"\F32.\STORE~\memarg", r"\hex{38}", r"[\I32~\F32] \to []"),
    instr(r"\F64.\STORE~\memarg", r"\hex{39}", r"[\I32~\F64] \to []"),
    instr(r"\I32.\STORE\K{8}~\memarg", r"\hex{3A}", r"[\I32~\I32] \to []"),
    instr(r"\I32.\STORE\K{16}~\memarg", r"\hex{3B}", r"[\I32~\I32] \to []"),
    instr(r"\I64.\STORE\K{8}~\memarg", r"\hex{3C}", r"[\I32~\I64] \to []"),
    instr(r"\I64.\STORE\K{16}~\memarg", r"\hex{3D}", r"[\I32~\I64] \to []"),
    instr(r"\I64.\STORE\K{32}~\memarg", r"\hex{3E}", r"[\I32~\I64] \to []"),
    instr(r"\MEMORYSIZE", r"\hex{3F}", r"[] \to [\I32]"),
    instr(r"\MEMORYGROW", r"\hex{40}", r"[\I32] \to [\I32]"),
    // ── Numeric constants ───────────────────────────────────────────
    instr(r"\I32.\CONST~\i32", r"\hex{41}", r"[] \to [\I32]"),
    instr(r"\I64.\CONST~\i64", r"\hex{42}", r"[] \to [\I64]"),
    instr(r"\F32.\CONST~\f32", r"\hex{43}", r"[] \to [\F32]"),
    instr(r"\F64.\CONST~\f64", r"\hex{44}", r"[] \to [\F64]"),
    // ── Integer comparison ──────────────────────────────────────────
    instr(r"\I32.\EQZ", r"\hex{45}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\EQ", r"\hex{46}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\NE", r"\hex{47}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\LT\K{\_s}", r"\hex{48}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\LT\K{\_u}", r"\hex{49}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\GT\K{\_s}", r"\hex{4A}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\GT\K{\_u}", r"\hex{4B}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\LE\K{\_s}", r"\hex{4C}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\LE\K{\_u}", r"\hex{4D}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\GE\K{\_s}", r"\hex{4E}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\GE\K{\_u}", r"\hex{4F}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I64.\EQZ", r"\hex{50}", r"[\I64] \to [\I32]"),
    instr(r"\I64.\EQ", r"\hex{51}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\NE", r"\hex{52}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\LT\K{\_s}", r"\hex{53}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\LT\K{\_u}", r"\hex{54}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\GT\K{\_s}", r"\hex{55}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\GT\K{\_u}", r"\hex{56}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\LE\K{\_s}", r"\hex{57}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\LE\K{\_u}", r"\hex{58}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\GE\K{\_s}", r"\hex{59}", r"[\I64~\I64] \to [\I32]"),
    instr(r"\I64.\GE\K{\_u}", r"\hex{5A}", r"[\I64~\I64] \to [\I32]"),
    // ── Float comparison ────────────────────────────────────────────
    instr(r"\F32.\EQ", r"\hex{5B}", r"[\F32~\F32] \to [\I32]"),
    instr(r"\F32.\NE", r"\hex{5C}", r"[\F32~\F32] \to [\I32]"),
    instr(r"\F32.\LT", r"\hex{5D}", r"[\F32~\F32] \to [\I32]"),
    instr(r"\F32.\GT", r"\hex{5E}", r"[\F32~\F32] \to [\I32]"),
    instr(r"\F32.\LE", r"\hex{5F}", r"[\F32~\F32] \to [\I32]"),
    instr(r"\F32.\GE", r"\hex{60}", r"[\F32~\F32] \to [\I32]"),
    instr(r"\F64.\EQ", r"\hex{61}", r"[\F64~\F64] \to [\I32]"),
    instr(r"\F64.\NE", r"\hex{62}", r"[\F64~\F64] \to [\I32]"),
    instr(r"\F64.\LT", r"\hex{63}", r"[\F64~\F64] \to [\I32]"),
    instr(r"\F64.\GT", r"\hex{64}", r"[\F64~\F64] \to [\I32]"),
    instr(r"\F64.\LE", r"\hex{65}", r"[\F64~\F64] \to [\I32]"),
    instr(r"\F64.\GE", r"\hex{66}", r"[\F64~\F64] \to [\I32]"),
    // ── Integer arithmetic ──────────────────────────────────────────
    instr(r"\I32.\CLZ", r"\hex{67}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\CTZ", r"\hex{68}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\POPCNT", r"\hex{69}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\ADD", r"\hex{6A}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\SUB", r"\hex{6B}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\MUL", r"\hex{6C}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\DIV\K{\_s}", r"\hex{6D}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\DIV\K{\_u}", r"\hex{6E}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\REM\K{\_s}", r"\hex{6F}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\REM\K{\_u}", r"\hex{70}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\AND", r"\hex{71}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\OR", r"\hex{72}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\XOR", r"\hex{73}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\SHL", r"\hex{74}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\SHR\K{\_s}", r"\hex{75}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\SHR\K{\_u}", r"\hex{76}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\ROTL", r"\hex{77}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I32.\ROTR", r"\hex{78}", r"[\I32~\I32] \to [\I32]"),
    instr(r"\I64.\CLZ", r"\hex{79}", r"[\I64] \to [\I64]"),
    instr(r"\I64.\CTZ", r"\hex{7A}", r"[\I64] \to [\I64]"),
    instr(r"\I64.\POPCNT", r"\hex{7B}", r"[\I64] \to [\I64]"),
    instr(r"\I64.\ADD", r"\hex{7C}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\SUB", r"\hex{7D}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\MUL", r"\hex{7E}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\DIV\K{\_s}", r"\hex{7F}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\DIV\K{\_u}", r"\hex{80}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\REM\K{\_s}", r"\hex{81}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\REM\K{\_u}", r"\hex{82}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\AND", r"\hex{83}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\OR", r"\hex{84}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\XOR", r"\hex{85}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\SHL", r"\hex{86}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\SHR\K{\_s}", r"\hex{87}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\SHR\K{\_u}", r"\hex{88}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\ROTL", r"\hex{89}", r"[\I64~\I64] \to [\I64]"),
    instr(r"\I64.\ROTR", r"\hex{8A}", r"[\I64~\I64] \to [\I64]"),
    // ── Float arithmetic ────────────────────────────────────────────
    instr(r"\F32.\ABS", r"\hex{8B}", r"[\F32] \to [\F32]"),
    instr(r"\F32.\NEG", r"\hex{8C}", r"[\F32] \to [\F32]"),
    instr(r"\F32.\CEIL", r"\hex{8D}", r"[\F32] \to [\F32]"),
    instr(r"\F32.\FLOOR", r"\hex{8E}", r"[\F32] \to [\F32]"),
    instr(r"\F32.\TRUNC", r"\hex{8F}", r"[\F32] \to [\F32]"),
    instr(r"\F32.\NEAREST", r"\hex{90}", r"[\F32] \to [\F32]"),
    instr(r"\F32.\SQRT", r"\hex{91}", r"[\F32] \to [\F32]"),
    instr(r"\F32.\ADD", r"\hex{92}", r"[\F32~\F32] \to [\F32]"),
    instr(r"\F32.\SUB", r"\hex{93}", r"[\F32~\F32] \to [\F32]"),
    instr(r"\F32.\MUL", r"\hex{94}", r"[\F32~\F32] \to [\F32]"),
    instr(r"\F32.\DIV", r"\hex{95}", r"[\F32~\F32] \to [\F32]"),
    instr(r"\F32.\FMIN", r"\hex{96}", r"[\F32~\F32] \to [\F32]"),
    instr(r"\F32.\FMAX", r"\hex{97}", r"[\F32~\F32] \to [\F32]"),
    instr(r"\F32.\COPYSIGN", r"\hex{98}", r"[\F32~\F32] \to [\F32]"),
    instr(r"\F64.\ABS", r"\hex{99}", r"[\F64] \to [\F64]"),
    instr(r"\F64.\NEG", r"\hex{9A}", r"[\F64] \to [\F64]"),
    instr(r"\F64.\CEIL", r"\hex{9B}", r"[\F64] \to [\F64]"),
    instr(r"\F64.\FLOOR", r"\hex{9C}", r"[\F64] \to [\F64]"),
    instr(r"\F64.\TRUNC", r"\hex{9D}", r"[\F64] \to [\F64]"),
    instr(r"\F64.\NEAREST", r"\hex{9E}", r"[\F64] \to [\F64]"),
    instr(r"\F64.\SQRT", r"\hex{9F}", r"[\F64] \to [\F64]"),
    instr(r"\F64.\ADD", r"\hex{A0}", r"[\F64~\F64] \to [\F64]"),
    instr(r"\F64.\SUB", r"\hex{A1}", r"[\F64~\F64] \to [\F64]"),
    instr(r"\F64.\MUL", r"\hex{A2}", r"[\F64~\F64] \to [\F64]"),
    instr(r"\F64.\DIV", r"\hex{A3}", r"[\F64~\F64] \to [\F64]"),
    instr(r"\F64.\FMIN", r"\hex{A4}", r"[\F64~\F64] \to [\F64]"),
    instr(r"\F64.\FMAX", r"\hex{A5}", r"[\F64~\F64] \to [\F64]"),
    instr(r"\F64.\COPYSIGN", r"\hex{A6}", r"[\F64~\F64] \to [\F64]"),
    // ── Conversions ─────────────────────────────────────────────────
    instr(r"\I32.\WRAP\K{\_}\I64", r"\hex{A7}", r"[\I64] \to [\I32]"),
    instr(r"\I32.\TRUNC\K{\_}\F32\K{\_s}", r"\hex{A8}", r"[\F32] \to [\I32]"),
    instr(r"\I32.\TRUNC\K{\_}\F32\K{\_u}", r"\hex{A9}", r"[\F32] \to [\I32]"),
    instr(r"\I32.\TRUNC\K{\_}\F64\K{\_s}", r"\hex{AA}", r"[\F64] \to [\I32]"),
    instr(r"\I32.\TRUNC\K{\_}\F64\K{\_u}", r"\hex{AB}", r"[\F64] \to [\I32]"),
    instr(r"\I64.\EXTEND\K{\_}\I32\K{\_s}", r"\hex{AC}", r"[\I32] \to [\I64]"),
    instr(r"\I64.\EXTEND\K{\_}\I32\K{\_u}", r"\hex{AD}", r"[\I32] \to [\I64]"),
    instr(r"\I64.\TRUNC\K{\_}\F32\K{\_s}", r"\hex{AE}", r"[\F32] \to [\I64]"),
    instr(r"\I64.\TRUNC\K{\_}\F32\K{\_u}", r"\hex{AF}", r"[\F32] \to [\I64]"),
    instr(r"\I64.\TRUNC\K{\_}\F64\K{\_s}", r"\hex{B0}", r"[\F64] \to [\I64]"),
    instr(r"\I64.\TRUNC\K{\_}\F64\K{\_u}", r"\hex{B1}", r"[\F64] \to [\I64]"),
    instr(r"\F32.\CONVERT\K{\_}\I32\K{\_s}", r"\hex{B2}", r"[\I32] \to [\F32]"),
    instr(r"\F32.\CONVERT\K{\_}\I32\K{\_u}", r"\hex{B3}", r"[\I32] \to [\F32]"),
    instr(r"\F32.\CONVERT\K{\_}\I64\K{\_s}", r"\hex{B4}", r"[\I64] \to [\F32]"),
    instr(r"\F32.\CONVERT\K{\_}\I64\K{\_u}", r"\hex{B5}", r"[\I64] \to [\F32]"),
    instr(r"\F32.\DEMOTE\K{\_}\F64", r"\hex{B6}", r"[\F64] \to [\F32]"),
    instr(r"\F64.\CONVERT\K{\_}\I32\K{\_s}", r"\hex{B7}", r"[\I32] \to [\F64]"),
    instr(r"\F64.\CONVERT\K{\_}\I32\K{\_u}", r"\hex{B8}", r"[\I32] \to [\F64]"),
    instr(r"\F64.\CONVERT\K{\_}\I64\K{\_s}", r"\hex{B9}", r"[\I64] \to [\F64]"),
    instr(r"\F64.\CONVERT\K{\_}\I64\K{\_u}", r"\hex{BA}", r"[\I64] \to [\F64]"),
    instr(r"\F64.\PROMOTE\K{\_}\F32", r"\hex{BB}", r"[\F32] \to [\F64]"),
    instr(r"\I32.\REINTERPRET\K{\_}\F32", r"\hex{BC}", r"[\F32] \to [\I32]"),
    instr(r"\I64.\REINTERPRET\K{\_}\F64", r"\hex{BD}", r"[\F64] \to [\I64]"),
    instr(r"\F32.\REINTERPRET\K{\_}\I32", r"\hex{BE}", r"[\I32] \to [\F32]"),
    instr(r"\F64.\REINTERPRET\K{\_}\I64", r"\hex{BF}", r"[\I64] \to [\F64]"),
    // ── Sign extension ──────────────────────────────────────────────
    instr(r"\I32.\EXTEND\K{8\_s}", r"\hex{C0}", r"[\I32] \to [\I32]"),
    instr(r"\I32.\EXTEND\K{16\_s}", r"\hex{C1}", r"[\I32] \to [\I32]"),
    instr(r"\I64.\EXTEND\K{8\_s}", r"\hex{C2}", r"[\I64] \to [\I64]"),
    instr(r"\I64.\EXTEND\K{16\_s}", r"\hex{C3}", r"[\I64] \to [\I64]"),
    instr(r"\I64.\EXTEND\K{32\_s}", r"\hex{C4}", r"[\I64] \to [\I64]"),
    reserved(r"\hex{C5}"),
    reserved(r"\hex{C6}"),
    reserved(r"\hex{C7}"),
    reserved(r"\hex{C8}"),
    reserved(r"\hex{C9}"),
    reserved(r"\hex{CA}"),
    reserved(r"\hex{CB}"),
    reserved(r"\hex{CC}"),
    reserved(r"\hex{CD}"),
    reserved(r"\hex{CE}"),
    reserved(r"\hex{CF}"),
    // ── Reference ───────────────────────────────────────────────────
    instr(r"\REFNULL~t", r"\hex{D0}", r"[] \to [t]"),
    instr(r"\REFISNULL", r"\hex{D1}", r"[t] \to [\I32]"),
    instr(r"\REFFUNC~x", r"\hex{D2}", r"[] \to [\FUNCREF]"),
    reserved(r"\hex{D3}"),
    reserved(r"\hex{D4}"),
    reserved(r"\hex{D5}"),
    reserved(r"\hex{D6}"),
    reserved(r"\hex{D7}"),
    reserved(r"\hex{D8}"),
    reserved(r"\hex{D9}"),
    reserved(r"\hex{DA}"),
    reserved(r"\hex{DB}"),
    reserved(r"\hex{DC}"),
    reserved(r"\hex{DD}"),
    reserved(r"\hex{DE}"),
    reserved(r"\hex{DF}"),
    // ── Unassigned ──────────────────────────────────────────────────
    reserved(r"\hex{E0}"),
    reserved(r"\hex{E1}"),
    reserved(r"\hex{E2}"),
    reserved(r"\hex{E3}"),
    reserved(r"\hex{E4}"),
    reserved(r"\hex{E5}"),
    reserved(r"\hex{E6}"),
    reserved(r"\hex{E7}"),
    reserved(r"\hex{E8}"),
    reserved(r"\hex{E9}"),
    reserved(r"\hex{EA}"),
    reserved(r"\hex{EB}"),
    reserved(r"\hex{EC}"),
    reserved(r"\hex{ED}"),
    reserved(r"\hex{EE}"),
    reserved(r"\hex{EF}"),
    reserved(r"\hex{F0}"),
    reserved(r"\hex{F1}"),
    reserved(r"\hex{F2}"),
    reserved(r"\hex{F3}"),
    reserved(r"\hex{F4}"),
    reserved(r"\hex{F5}"),
    reserved(r"\hex{F6}"),
    reserved(r"\hex{F7}"),
    reserved(r"\hex{F8}"),
    reserved(r"\hex{F9}"),
    reserved(r"\hex{FA}"),
    reserved(r"\hex{FB}"),
];
