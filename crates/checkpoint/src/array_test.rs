mod tests {
    use crate::array::Array;
    use crate::error::Error;

    #[test]
    fn test_from_vec_is_one_dimensional() {
        let a = Array::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(a.shape(), &[3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.data(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_shape_vec_validates_volume() {
        let ok = Array::from_shape_vec(vec![2, 3], vec![0.0; 6]).unwrap();
        assert_eq!(ok.shape(), &[2, 3]);
        assert_eq!(ok.len(), 6);

        let bad = Array::from_shape_vec(vec![2, 3], vec![0.0; 5]);
        assert!(matches!(bad, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_array() {
        let a = Array::from_vec(Vec::new());
        assert!(a.is_empty());
        assert_eq!(a.shape(), &[0]);
    }
}
