/// Una página de una colección remota paginada.
///
/// Se reemplaza entera en cada fetch exitoso; nunca se muta en sitio.
#[derive(Clone, PartialEq, Debug)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Base 1
    pub page_number: u32,
    pub page_count: u32,
    pub total_count: u64,
}

impl<T> PageResult<T> {
    /// Normaliza page_number a `1..=max(page_count, 1)`
    pub fn new(items: Vec<T>, page_number: u32, page_count: u32, total_count: u64) -> Self {
        Self {
            items,
            page_number: page_number.clamp(1, page_count.max(1)),
            page_count,
            total_count,
        }
    }
}
