pub mod core;
pub mod analysis;
pub mod query;
pub mod concordance;
pub mod corpus;
pub mod parallel;
pub mod export;

/*
┌──────────────────────────────────────────────────────────────────────┐
│                        KWIC STRUCT ARCHITECTURE                      │
└──────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── CORE LAYER ────────────────────────────┐
│                                                                      │
│  ┌────────────────────────────────────────────────────────────┐      │
│  │                    struct Concordancer                     │      │
│  │  ┌──────────────────────────────────────────────────────┐  │      │
│  │  │ config: ConcordanceConfig   // width / line / size   │  │      │
│  │  │ tokenizer: Box<dyn Tokenizer> // word segmentation   │  │      │
│  │  │ cache: ConcordanceCache     // finished results      │  │      │
│  │  │ token_memo: LruCache        // text -> token memo    │  │      │
│  │  └──────────────────────────────────────────────────────┘  │      │
│  └────────────────────────────────────────────────────────────┘      │
│                                                                      │
│  ┌────────────────────┐  ┌─────────────────────────────────────┐     │
│  │ ConcordanceRequest │  │ Error { kind, context }             │     │
│  │ • text, query      │  │ • InvalidQuery / InvalidParameter   │     │
│  │ • width, max_lines │  │ • InvalidInput / SourceUnavailable  │     │
│  └────────────────────┘  └─────────────────────────────────────┘     │
└──────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── ANALYSIS LAYER ──────────────────────────┐
│                                                                      │
│  raw text ──► WordTokenizer (UAX-29 word bounds, lowercased)         │
│           ──► Vec<Token> { text, position, offset, token_type }      │
└──────────────────────────────────────────────────────────────────────┘

┌─────────────────────────── CONCORDANCE LAYER ────────────────────────┐
│                                                                      │
│  tokens + query ──► engine::concordance(width, max_lines)            │
│                 ──► ConcordanceResult { lines, total_count, query }  │
│                     ConcordanceLine { left, match, right, line }     │
└──────────────────────────────────────────────────────────────────────┘

┌────────────────────────── COLLABORATOR LAYER ────────────────────────┐
│                                                                      │
│  corpus::TextProvider (in-memory / directory)                        │
│  corpus::compare_frequencies  ──► Vec<FrequencyPoint> (chart data)   │
│  parallel::BatchConcordancer  ──► Vec<BatchEntry> ──► rows()         │
│  export::{to_plain_text, rows_to_csv, to_json}                       │
└──────────────────────────────────────────────────────────────────────┘
*/
