mod mediator;

pub use mediator::{FileUpload, UploadMediator};
