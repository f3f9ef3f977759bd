mod custom;
mod resource;
mod service;
mod stream;

pub use self::custom::CustomFile;
pub use self::resource::{
    CUSTOM_LIST_KEYS, Collection, Namespace, PathError, Related, ResourceDescriptor,
};
pub use self::service::Service;
pub use self::stream::{Generator, Stream, T_STREAM_TYPE};
