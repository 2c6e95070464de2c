/// A fixed-table extractor for one strategic framework.
///
/// Implementations are stateless: the same text always yields the same records.
pub trait FrameworkExtractor: Send + Sync {
    type Output;

    /// Framework label used in logs ("pestel", "five_forces", "swot").
    fn framework(&self) -> &'static str;

    fn extract(&self, text: &str) -> Vec<Self::Output>;
}
