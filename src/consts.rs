/// Highest n-gram order stored in a language model.
pub const MAX_NGRAM_ORDER: usize = 5;

/// Ceiling on input length, in characters. Longer inputs are rejected as
/// InvalidInput rather than silently truncated.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 65_536;

/// Log10 probability assigned to an n-gram absent from a model table.
/// Must sit below any observed value so an unseen gram depresses a
/// candidate without zeroing it.
pub const DEFAULT_UNSEEN_LOGP: f64 = -7.0;

/// Softmax sharpness used when converting raw scores to confidences.
/// 1.0 means a one-decade gap in mean log10 probability translates to a
/// 10x confidence ratio.
pub const DEFAULT_SHARPNESS: f64 = 1.0;

/// Per-order scoring weights, orders 1 through 5. Higher orders are more
/// specific and weigh more.
pub const DEFAULT_ORDER_WEIGHTS: [f64; MAX_NGRAM_ORDER] = [1.0, 2.0, 3.0, 4.0, 5.0];
