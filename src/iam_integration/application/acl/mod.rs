pub mod grpc_iam_authentication_facade_impl;
