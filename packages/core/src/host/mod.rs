// Host-side collaborators that drive the controller: route titles and the
// view lifecycle.

pub mod routes;
pub mod view;
