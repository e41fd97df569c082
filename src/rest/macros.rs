/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Declares a response type holding a single decoded value stored under `$key` in the payload
macro_rules! nested_response {
    ( $name:ident, $field:ident: $t:ty, $key:literal, $decode:expr ) => {
        #[derive(Debug)]
        pub(crate) struct $name {
            pub(crate) $field: $t,
        }

        impl $crate::rest::ApiResponse for $name {
            fn decode(
                payload: &$crate::rest::JsonObject,
            ) -> Result<Self, $crate::rest::DecodeError> {
                Ok(Self {
                    $field: $crate::rest::decode_nested(stringify!($name), payload, $key, $decode)?,
                })
            }
        }
    };
}

// Requests page after page of a paginated method, yielding the items one at a time
macro_rules! stream_pages {
    ( $api:expr, $method:expr, $params:expr, $per_page:expr, $rt:ty, $r:ident ) => {{
        try_stream! {
            let mut page: u32 = 1;
            loop {
                let mut args = ArgumentSet::new($method);
                for (name, value) in $params.iter() {
                    args.put(name, *value)?;
                }
                args.put("per_page", $per_page)?.put("page", page)?;

                let resp = $api.do_get::<$rt>(args).await?.$r;
                let has_next_page = resp.has_next_page();
                for item in resp {
                    yield item
                }

                if !has_next_page {
                    break;
                }
                page += 1;
            }
        }
    }};
}

pub(crate) use {nested_response, stream_pages};
