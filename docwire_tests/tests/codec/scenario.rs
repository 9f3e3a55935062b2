use anyhow::{anyhow, Result};
use docwire_types::serde::{Reader, Writer};
use docwire_types::value::{TaggedValue, ValueRef};
use docwire_types::CodecError;
use itertools::Itertools;
use rand::Rng;

pub fn test_tagged_scenario() -> Result<()> {
    let originals = [
        TaggedValue::Int32(42),
        TaggedValue::from("hello"),
        TaggedValue::Double(2.5),
    ];

    let mut w = Writer::new();
    for val in originals.iter() {
        w.write_tagged_value(val);
    }
    let buf = w.detach();
    assert!(w.is_empty());

    let mut r = Reader::new(&buf);
    for orig in originals.iter() {
        let val = r.read_tagged_value()?;
        assert_eq!(orig, &val);
    }
    assert!(r.at_end());

    let views = Reader::new(&buf)
        .into_tagged_values()
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(
        vec![
            ValueRef::Int32(42),
            ValueRef::String(b"hello"),
            ValueRef::Double(2.5)
        ],
        views
    );

    Ok(())
}

#[derive(Debug)]
enum Field {
    Int(i32),
    Long(i64),
    VarInt(i64),
    VarUint(u64),
    Bool(bool),
    FixedStr(Vec<u8>),
    VarStr(Vec<u8>),
    Tagged(TaggedValue),
}

impl Field {
    fn write(&self, w: &mut Writer) {
        match self {
            Self::Int(i) => w.write_i32(*i),
            Self::Long(i) => w.write_i64(*i),
            Self::VarInt(i) => w.write_varint(*i),
            Self::VarUint(u) => w.write_var_uint(*u),
            Self::Bool(b) => w.write_bool(*b),
            Self::FixedStr(s) => w.write_fixed_string(s),
            Self::VarStr(s) => w.write_var_string(s),
            Self::Tagged(val) => w.write_tagged_value(val),
        }
    }

    fn verify(&self, r: &mut Reader) -> docwire_types::Result<()> {
        match self {
            Self::Int(i) => assert_eq!(*i, r.read_i32()?),
            Self::Long(i) => assert_eq!(*i, r.read_i64()?),
            Self::VarInt(i) => assert_eq!(*i, r.read_varint()?),
            Self::VarUint(u) => assert_eq!(*u, r.read_var_uint()?),
            Self::Bool(b) => assert_eq!(*b, r.read_bool()?),
            Self::FixedStr(s) => assert_eq!(&s[..], r.read_fixed_string_view()?),
            Self::VarStr(s) => assert_eq!(&s[..], r.read_var_string_view()?),
            Self::Tagged(val) => assert_eq!(val, &r.read_tagged_value_view()?),
        }
        Ok(())
    }
}

fn gen_str(rng: &mut impl Rng) -> Vec<u8> {
    let len = rng.gen_range(0..600);
    (0..len).map(|_| rng.gen::<u8>()).collect_vec()
}

fn gen_field(rng: &mut impl Rng) -> Field {
    match rng.gen_range(0..8) {
        0 => Field::Int(rng.gen()),
        1 => Field::Long(rng.gen()),
        2 => Field::VarInt(rng.gen()),
        3 => Field::VarUint(rng.gen::<u64>() >> rng.gen_range(0..64u32)),
        4 => Field::Bool(rng.gen()),
        5 => Field::FixedStr(gen_str(rng)),
        6 => Field::VarStr(gen_str(rng)),
        _ => Field::Tagged(TaggedValue::String(gen_str(rng))),
    }
}

/// Interleaves every field kind in one buffer, crossing the inline threshold along the way,
/// then checks that each truncation of the buffer fails cleanly somewhere.
pub fn test_mixed_stream() -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let fields = (0..rng.gen_range(1..30))
            .map(|_| gen_field(&mut rng))
            .collect_vec();

        let mut w = Writer::new();
        for field in fields.iter() {
            field.write(&mut w);
        }
        let buf = w.detach();

        let mut r = Reader::new(&buf);
        for field in fields.iter() {
            field
                .verify(&mut r)
                .map_err(|e| anyhow!("{field:?}: {e}"))?;
        }
        assert!(r.at_end());

        let cut = rng.gen_range(0..buf.len());
        let mut r = Reader::new(&buf[..cut]);
        let mut failed = false;
        for field in fields.iter() {
            let pos = r.position();
            match field.verify(&mut r) {
                Ok(()) => {}
                Err(CodecError::TruncatedInput { .. }) => {
                    assert_eq!(pos, r.position());
                    failed = true;
                    break;
                }
                Err(e) => panic!("{field:?} at {cut}: {e}"),
            }
        }
        assert!(failed, "{cut} of {}", buf.len());
    }

    Ok(())
}
