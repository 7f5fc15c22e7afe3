pub mod person;
pub mod reference;
pub mod thesis;

pub use person::{NewPerson, Person, PersonTitle};
pub use reference::{Institute, LookupEntry, NewInstitute, University};
pub use thesis::{NewThesis, Thesis, ThesisSearchResult};
