/// Stand-in route table for gate tests.
///
/// The gate is generic over the route type, so tests exercise it against
/// this fixture enum instead of the client's `Routable` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestRoute {
    Home,
    Dashboard,
}
