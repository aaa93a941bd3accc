// Mascot Application Layer

mod presenter;

pub use presenter::MascotPresenter;
