use anyhow::Result;
use docwire_cbinding::{
    decode_values, docwire_destroy, docwire_free_buffer, docwire_init, docwire_normalize_values,
    docwire_values_to_json, encode_values, ErrorCode, WireBuffer, WireError,
};
use docwire_types::value::{TaggedValue, ValueRef};

/// A caller encodes query arguments, the binding validates them and hands back its own
/// buffer, the caller decodes it in place and releases it.
pub fn test_boundary_lifecycle() -> Result<()> {
    let args = [
        TaggedValue::Int32(i32::MIN),
        TaggedValue::Int64(1 << 40),
        TaggedValue::Double(-0.125),
        TaggedValue::from("ns_items"),
        TaggedValue::String(vec![0u8; 10000]),
    ];
    let input = encode_values(args.iter());
    let input_buf = WireBuffer {
        data: input.as_ptr() as *mut u8,
        len: input.len(),
    };

    let binding = docwire_init(None);

    let ret = unsafe { docwire_normalize_values(binding, input_buf) };
    assert_eq!(Some(ErrorCode::Ok), ret.err.error_code());
    {
        let out = unsafe { ret.out.as_slice()? };
        assert_ne!(input.as_ptr(), out.as_ptr());
        let decoded = decode_values(out).collect::<Result<Vec<_>, _>>()?;
        assert_eq!(args.len(), decoded.len());
        for (arg, val) in args.iter().zip(decoded.iter()) {
            assert_eq!(arg, val);
        }
        assert_eq!(ValueRef::from("ns_items"), decoded[3]);
    }
    assert_eq!(WireError::ok(), unsafe { docwire_free_buffer(ret.out) });

    let ret = unsafe { docwire_values_to_json(binding, input_buf) };
    assert_eq!(Some(ErrorCode::Ok), ret.err.error_code());
    let json = unsafe { ret.out.into_vec() };
    assert!(json.starts_with(br#"[-2147483648,1099511627776,-0.125,"ns_items",""#));
    assert!(json.ends_with(b"\"]"));

    /* Failures hand back nothing to release. */
    let truncated = WireBuffer {
        data: input_buf.data,
        len: input.len() - 1,
    };
    let ret = unsafe { docwire_normalize_values(binding, truncated) };
    assert_eq!(Some(ErrorCode::TruncatedInput), ret.err.error_code());
    assert!(ret.out.is_null());

    unsafe { docwire_destroy(binding) };
    Ok(())
}
